//! The [`enumeration!`](crate::enumeration) declaration macro.

/// Declare a static enumeration.
///
/// Expands to a `static` [`LazyLock`](std::sync::LazyLock) whose first
/// access runs the builder. Each member is `NAME = (value, slug)` or
/// `NAME = (value, slug, display)`.
///
/// A declaration error (duplicate value, duplicate slug, reserved name)
/// panics on first access: declaration errors are programmer errors and the
/// enumeration must never become usable.
///
/// # Example
///
/// ```
/// use stele_core::enumeration;
///
/// enumeration! {
///     pub static FUNNEL_STAGE: "funnel_stage" {
///         LANDING = (10, "landing"),
///         EMAIL = (20, "email"),
///         PAYMENT = (30, "payment", "Payment details"),
///     }
/// }
///
/// assert_eq!(FUNNEL_STAGE.from_slug("email").unwrap().value(), 20);
/// assert_eq!(FUNNEL_STAGE["PAYMENT"].display(), "Payment details");
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $vis:vis static $ident:ident : $name:literal {
            $($member:ident = ($value:expr, $slug:literal $(, $display:literal)?)),+ $(,)?
        }
    ) => {
        $vis static $ident: ::std::sync::LazyLock<$crate::Enumeration> =
            ::std::sync::LazyLock::new(|| {
                $crate::Enumeration::builder($name)
                    $(
                        .item(
                            ::std::stringify!($member),
                            $crate::enumeration!(@item $value, $slug $(, $display)?),
                        )
                    )+
                    .build()
                    .unwrap_or_else(|err| {
                        ::std::panic!("declaration of enumeration '{}' failed: {err}", $name)
                    })
            });
    };

    (@item $value:expr, $slug:literal) => {
        $crate::Item::new($value, $slug)
    };
    (@item $value:expr, $slug:literal, $display:literal) => {
        $crate::Item::with_display($value, $slug, $display)
    };
}
