use std::fmt;

/// A field value that may be restricted to an architecture and/or a
/// distribution.
///
/// Written in a `.SRCINFO` as `key[_distro][_arch] = value`, for example
/// `depends_x86_64 = glibc` or `depends_debian_amd64 = libc6`.
///
/// An empty `value` is an *empty override*: the field was explicitly set to
/// nothing, which clears whatever a split package would otherwise inherit.
/// Parsed values are trimmed, so a real value is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchDistroValue {
    /// Target architecture. `None` applies to every declared architecture.
    pub arch: Option<String>,
    /// Target distribution. `None` applies to every distribution.
    pub distro: Option<String>,
    /// The value itself.
    pub value: String,
}

impl ArchDistroValue {
    /// An unqualified value.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcinfo::ArchDistroValue;
    ///
    /// let v = ArchDistroValue::new("glibc");
    /// assert_eq!(v.arch, None);
    /// assert_eq!(v.key("depends"), "depends");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        ArchDistroValue {
            arch: None,
            distro: None,
            value: value.into(),
        }
    }

    /// Restrict this value to `arch`.
    pub fn with_arch(mut self, arch: impl Into<String>) -> Self {
        self.arch = Some(arch.into());
        self
    }

    /// Restrict this value to `distro`.
    pub fn with_distro(mut self, distro: impl Into<String>) -> Self {
        self.distro = Some(distro.into());
        self
    }

    /// Whether this entry explicitly clears the field.
    pub fn is_empty_override(&self) -> bool {
        self.value.is_empty()
    }

    /// The full key this value is written under, e.g. `depends_debian_amd64`.
    pub fn key(&self, field: &str) -> String {
        self.qualified(field).to_string()
    }

    pub(crate) fn qualified<'a>(&'a self, field: &'a str) -> QualifiedKey<'a> {
        QualifiedKey { field, value: self }
    }
}

/// Display adapter rendering `field[_distro][_arch]`.
pub(crate) struct QualifiedKey<'a> {
    field: &'a str,
    value: &'a ArchDistroValue,
}

impl fmt::Display for QualifiedKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.field)?;
        if let Some(ref distro) = self.value.distro {
            write!(f, "_{distro}")?;
        }
        if let Some(ref arch) = self.value.arch {
            write!(f, "_{arch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_unqualified() {
        assert_eq!(ArchDistroValue::new("a").key("depends"), "depends");
    }

    #[test]
    fn key_arch_only() {
        let v = ArchDistroValue::new("a").with_arch("x86_64");
        assert_eq!(v.key("depends"), "depends_x86_64");
    }

    #[test]
    fn key_distro_and_arch() {
        let v = ArchDistroValue::new("a")
            .with_arch("amd64")
            .with_distro("debian");
        assert_eq!(v.key("depends"), "depends_debian_amd64");
    }

    #[test]
    fn empty_override() {
        assert!(ArchDistroValue::new("").is_empty_override());
        assert!(!ArchDistroValue::new("x").is_empty_override());
    }
}
