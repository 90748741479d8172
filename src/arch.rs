use crate::error::LineError;

/// The wildcard architecture: the package is not architecture specific.
///
/// It may appear in the `arch` list but never as a key qualifier.
pub const ANY_ARCH: &str = "any";

/// Architecture names that are rejected as qualifiers when undeclared
/// instead of being read as a distribution.
///
/// Covers the pacman and Debian naming schemes.
pub const KNOWN_ARCHITECTURES: &[&str] = &[
    "aarch64",
    "amd64",
    "arm",
    "arm64",
    "armel",
    "armhf",
    "armv6h",
    "armv7h",
    "i386",
    "i486",
    "i686",
    "loong64",
    "loongarch64",
    "mips64el",
    "pentium4",
    "powerpc",
    "powerpc64",
    "powerpc64le",
    "ppc64",
    "ppc64el",
    "ppc64le",
    "riscv64",
    "s390x",
    "x86_64",
    "x86_64_v2",
    "x86_64_v3",
    "x86_64_v4",
];

/// A field key split into its name and qualifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SplitKey<'a> {
    pub name: &'a str,
    pub distro: Option<&'a str>,
    pub arch: Option<&'a str>,
}

/// Split `name[_distro][_arch]` using the declared architectures to tell an
/// architecture apart from a distribution.
///
/// Architectures may themselves contain an underscore (`x86_64`), so for
/// `name_A_B` both `B` and `A_B` are tried. Empty qualifiers (`name_`,
/// `name__A`) are rejected.
pub(crate) fn split_key<'a>(arches: &[String], key: &'a str) -> Result<SplitKey<'a>, LineError> {
    if let Some((_, qualifiers)) = key.split_once('_') {
        if qualifiers.split('_').any(str::is_empty) {
            return Err(LineError::EmptyQualifier(key.to_string()));
        }
    }

    let mut parts = key.splitn(3, '_');
    let name = parts.next().unwrap_or(key);
    let first = parts.next();
    let second = parts.next();

    let split = match (first, second) {
        (Some(a), Some(b)) => {
            let joined = &key[name.len() + 1..];
            if is_valid_arch(arches, b) {
                SplitKey {
                    name,
                    distro: Some(a),
                    arch: Some(b),
                }
            } else if is_valid_arch(arches, joined) {
                SplitKey {
                    name,
                    distro: None,
                    arch: Some(joined),
                }
            } else {
                check_undeclared(key, b)?;
                check_undeclared(key, joined)?;
                SplitKey {
                    name,
                    distro: Some(joined),
                    arch: None,
                }
            }
        }
        (Some(x), None) => {
            if is_valid_arch(arches, x) {
                SplitKey {
                    name,
                    distro: None,
                    arch: Some(x),
                }
            } else {
                check_undeclared(key, x)?;
                SplitKey {
                    name,
                    distro: Some(x),
                    arch: None,
                }
            }
        }
        _ => SplitKey {
            name,
            distro: None,
            arch: None,
        },
    };

    Ok(split)
}

/// Whether `arch` may qualify a key in a document declaring `arches`.
pub(crate) fn is_valid_arch(arches: &[String], arch: &str) -> bool {
    !arch.is_empty() && arch != ANY_ARCH && arches.iter().any(|a| a == arch)
}

/// Reject a qualifier that names an architecture the document did not
/// declare, or the wildcard.
fn check_undeclared(key: &str, qualifier: &str) -> Result<(), LineError> {
    if qualifier == ANY_ARCH {
        return Err(LineError::ForbiddenArch {
            key: key.to_string(),
            arch: qualifier.to_string(),
        });
    }
    if KNOWN_ARCHITECTURES.contains(&qualifier) {
        return Err(LineError::UnsupportedArch {
            key: key.to_string(),
            arch: qualifier.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arches(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plain_key() {
        let k = split_key(&arches(&["x86_64"]), "depends").unwrap();
        assert_eq!(k.name, "depends");
        assert_eq!(k.distro, None);
        assert_eq!(k.arch, None);
    }

    #[test]
    fn arch_with_underscore() {
        let k = split_key(&arches(&["x86_64"]), "depends_x86_64").unwrap();
        assert_eq!(k.name, "depends");
        assert_eq!(k.distro, None);
        assert_eq!(k.arch, Some("x86_64"));
    }

    #[test]
    fn simple_arch() {
        let k = split_key(&arches(&["i686", "x86_64"]), "source_i686").unwrap();
        assert_eq!(k.arch, Some("i686"));
        assert_eq!(k.distro, None);
    }

    #[test]
    fn distro_only() {
        let k = split_key(&arches(&["amd64"]), "depends_debian").unwrap();
        assert_eq!(k.name, "depends");
        assert_eq!(k.distro, Some("debian"));
        assert_eq!(k.arch, None);
    }

    #[test]
    fn distro_and_arch() {
        let k = split_key(&arches(&["amd64"]), "depends_ubuntu_amd64").unwrap();
        assert_eq!(k.distro, Some("ubuntu"));
        assert_eq!(k.arch, Some("amd64"));
    }

    #[test]
    fn two_part_distro() {
        let k = split_key(&arches(&["amd64"]), "depends_ubuntu_jammy").unwrap();
        assert_eq!(k.distro, Some("ubuntu_jammy"));
        assert_eq!(k.arch, None);
    }

    #[test]
    fn distro_with_underscored_arch() {
        // At most three parts, so the trailing `x86_64` stays whole.
        let k = split_key(&arches(&["x86_64"]), "depends_debian_x86_64").unwrap();
        assert_eq!(k.distro, Some("debian"));
        assert_eq!(k.arch, Some("x86_64"));
    }

    #[test]
    fn undeclared_arch() {
        let err = split_key(&arches(&["x86_64"]), "source_i686").unwrap_err();
        assert_eq!(
            err,
            LineError::UnsupportedArch {
                key: "source_i686".to_string(),
                arch: "i686".to_string(),
            }
        );
    }

    #[test]
    fn undeclared_underscored_arch() {
        let err = split_key(&arches(&["aarch64"]), "depends_x86_64").unwrap_err();
        assert!(matches!(err, LineError::UnsupportedArch { ref arch, .. } if arch == "x86_64"));
    }

    #[test]
    fn undeclared_arch_after_distro() {
        let err = split_key(&arches(&["amd64"]), "depends_debian_arm64").unwrap_err();
        assert!(matches!(err, LineError::UnsupportedArch { ref arch, .. } if arch == "arm64"));
    }

    #[test]
    fn any_is_forbidden() {
        let err = split_key(&arches(&["any"]), "depends_any").unwrap_err();
        assert!(matches!(err, LineError::ForbiddenArch { .. }));
    }

    #[test]
    fn any_after_distro_is_forbidden() {
        let err = split_key(&arches(&["x86_64"]), "depends_debian_any").unwrap_err();
        assert_eq!(
            err,
            LineError::ForbiddenArch {
                key: "depends_debian_any".to_string(),
                arch: "any".to_string(),
            }
        );
    }

    #[test]
    fn empty_qualifiers_rejected() {
        let declared = arches(&["x86_64"]);
        for key in ["depends_", "depends__x86_64", "depends_debian_", "source_x86__64"] {
            assert_eq!(
                split_key(&declared, key),
                Err(LineError::EmptyQualifier(key.to_string())),
                "{key}"
            );
        }
    }

    #[test]
    fn valid_arch_rules() {
        let declared = arches(&["any", "x86_64"]);
        assert!(is_valid_arch(&declared, "x86_64"));
        assert!(!is_valid_arch(&declared, "any"));
        assert!(!is_valid_arch(&declared, ""));
        assert!(!is_valid_arch(&declared, "i686"));
    }
}
