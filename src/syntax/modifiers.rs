//! Declaration modifiers and accessibility.

/// A modifier keyword written on a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Internal,
    File,
    Static,
    Partial,
    Readonly,
    Abstract,
    Sealed,
}

/// The modifiers of one declaration, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(Vec<Modifier>);

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    pub fn push(&mut self, modifier: Modifier) {
        if !self.has(modifier) {
            self.0.push(modifier);
        }
    }

    pub fn is_static(&self) -> bool {
        self.has(Modifier::Static)
    }

    /// The declaration is open for generation (other parts may be emitted).
    pub fn is_partial(&self) -> bool {
        self.has(Modifier::Partial)
    }

    /// Accessibility spelled out by the user, if any keyword was written.
    pub fn declared_accessibility(&self) -> Option<Accessibility> {
        let public = self.has(Modifier::Public);
        let private = self.has(Modifier::Private);
        let protected = self.has(Modifier::Protected);
        let internal = self.has(Modifier::Internal);

        match (public, private, protected, internal) {
            (true, ..) => Some(Accessibility::Public),
            (_, true, true, _) => Some(Accessibility::ProtectedAndInternal),
            (_, _, true, true) => Some(Accessibility::ProtectedOrInternal),
            (_, true, _, _) => Some(Accessibility::Private),
            (_, _, true, _) => Some(Accessibility::Protected),
            (_, _, _, true) => Some(Accessibility::Internal),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut modifiers = Modifiers::new();
        for modifier in iter {
            modifiers.push(modifier);
        }
        modifiers
    }
}

impl<const N: usize> From<[Modifier; N]> for Modifiers {
    fn from(modifiers: [Modifier; N]) -> Self {
        modifiers.into_iter().collect()
    }
}

/// Effective accessibility of a type or constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Accessibility {
    #[default]
    NotApplicable,
    Private,
    /// `private protected`
    ProtectedAndInternal,
    Protected,
    Internal,
    /// `protected internal`
    ProtectedOrInternal,
    Public,
}

impl Accessibility {
    /// Keyword text as it would be written in source.
    pub fn keyword(self) -> &'static str {
        match self {
            Accessibility::NotApplicable => "",
            Accessibility::Private => "private",
            Accessibility::ProtectedAndInternal => "private protected",
            Accessibility::Protected => "protected",
            Accessibility::Internal => "internal",
            Accessibility::ProtectedOrInternal => "protected internal",
            Accessibility::Public => "public",
        }
    }

    /// Whether code outside the declaring type (and its subtypes) can invoke
    /// a member with this accessibility.
    pub fn is_publicly_invocable(self) -> bool {
        matches!(
            self,
            Accessibility::Internal | Accessibility::ProtectedOrInternal | Accessibility::Public
        )
    }
}
