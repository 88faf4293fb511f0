//! Shared traits for entities that tokens can refer to.

/// An item addressable by name from a quick-entry token.
///
/// Contexts and projects both implement this, as does any caller-side store
/// record that wants to be matched without first being copied into an
/// [`Entity`](crate::core::Entity).
pub trait Named {
    /// Stable identifier handed back to the caller on a match.
    fn id(&self) -> &str;

    /// Display name matched against token text.
    fn name(&self) -> &str;
}

impl<T: Named + ?Sized> Named for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
