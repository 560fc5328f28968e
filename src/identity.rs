use std::{borrow::Cow, fmt::Display};

/// Identity of a single test as the harness reports it.
///
/// The reporter treats this as opaque: it compares group keys to detect group
/// transitions and renders the qualified name, nothing more. Field contents
/// are the harness's contract and are not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestIdentity {
    /// Module path owning the group.
    pub namespace: Cow<'static, str>,
    /// Name of the group (suite) the test belongs to.
    pub group: Cow<'static, str>,
    /// Name of the test itself.
    pub name: Cow<'static, str>,
}

impl TestIdentity {
    pub fn new(
        namespace: impl Into<Cow<'static, str>>,
        group: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            group: group.into(),
            name: name.into(),
        }
    }

    /// Key of the group this test belongs to.
    pub fn group_key(&self) -> GroupKey<'_> {
        GroupKey {
            namespace: self.namespace.as_ref(),
            group: self.group.as_ref(),
        }
    }

    /// Fully qualified display name, `namespace.group.name()`.
    pub fn qualified(&self) -> String {
        format!("{}.{}.{}()", self.namespace, self.group, self.name)
    }
}

/// A `(namespace, group)` pair identifying a test group.
///
/// Two tests belong to the same group iff both elements of the pair match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupKey<'t> {
    pub namespace: &'t str,
    pub group: &'t str,
}

impl Display for GroupKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.namespace, self.group)
    }
}
