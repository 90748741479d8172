use std::fmt;
use std::str::FromStr;

use crate::error::LineError;
use crate::package::{Package, PackageBase};
use crate::value::ArchDistroValue;

/// Where a field lives and what shape its value has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single value on the package base (`pkgver`).
    BaseScalar,
    /// Repeated value on the package base (`maintainer`).
    BaseList,
    /// Repeated, architecture qualified value on the package base (`source_x86_64`).
    BaseArchList,
    /// Single value that split packages may override (`pkgdesc`).
    PackageScalar,
    /// Repeated value that split packages may override (`license`).
    PackageList,
    /// Repeated, architecture qualified value that split packages may
    /// override (`depends_x86_64`).
    PackageArchList,
}

impl FieldKind {
    /// Whether the field may only appear before the first `pkgname`.
    pub fn is_base(&self) -> bool {
        matches!(
            self,
            FieldKind::BaseScalar | FieldKind::BaseList | FieldKind::BaseArchList
        )
    }

    /// Whether the key may carry `_distro` / `_arch` qualifiers.
    pub fn is_arch_dependent(&self) -> bool {
        matches!(self, FieldKind::BaseArchList | FieldKind::PackageArchList)
    }
}

/// Mutable access to the value a field is stored in, tagged by its kind.
pub(crate) enum Slot<'a> {
    BaseScalar(&'a mut String),
    BaseList(&'a mut Vec<String>),
    BaseArchList(&'a mut Vec<ArchDistroValue>),
    PackageScalar(&'a mut Option<String>),
    PackageList(&'a mut Vec<String>),
    PackageArchList(&'a mut Vec<ArchDistroValue>),
}

macro_rules! fields {
    (
        base { $($bv:ident => $bn:literal, $bk:ident($bm:ident);)* }
        package { $($pv:ident => $pn:literal, $pk:ident($pm:ident);)* }
    ) => {
        /// Every field key a `.SRCINFO` may contain, apart from the
        /// `pkgbase` and `pkgname` section headers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Field {
            $(
                #[doc = concat!("`", $bn, "`")]
                $bv,
            )*
            $(
                #[doc = concat!("`", $pn, "`")]
                $pv,
            )*
        }

        impl Field {
            /// All fields, in declaration order.
            pub const ALL: &'static [Field] = &[$(Field::$bv,)* $(Field::$pv,)*];

            /// The key as written in a `.SRCINFO`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Field::$bv => $bn,)*
                    $(Field::$pv => $pn,)*
                }
            }

            /// Category used to route the field.
            pub fn kind(&self) -> FieldKind {
                match self {
                    $(Field::$bv => FieldKind::$bk,)*
                    $(Field::$pv => FieldKind::$pk,)*
                }
            }

            /// Look a key up by its unqualified name.
            pub fn from_name(name: &str) -> Option<Field> {
                match name {
                    $($bn => Some(Field::$bv),)*
                    $($pn => Some(Field::$pv),)*
                    _ => None,
                }
            }

            /// Where this field is stored: on `base` for package base
            /// fields, on `pkg` for everything else.
            pub(crate) fn slot<'a>(&self, base: &'a mut PackageBase, pkg: &'a mut Package) -> Slot<'a> {
                match self {
                    $(Field::$bv => Slot::$bk(&mut base.$bm),)*
                    $(Field::$pv => Slot::$pk(&mut pkg.$pm),)*
                }
            }
        }
    };
}

fields! {
    base {
        Pkgver => "pkgver", BaseScalar(pkgver);
        Pkgrel => "pkgrel", BaseScalar(pkgrel);
        Epoch => "epoch", BaseScalar(epoch);
        Mask => "mask", BaseList(mask);
        Compatible => "compatible", BaseList(compatible);
        Incompatible => "incompatible", BaseList(incompatible);
        Maintainer => "maintainer", BaseList(maintainer);
        NoExtract => "noextract", BaseList(noextract);
        NoSubmodules => "nosubmodules", BaseList(nosubmodules);
        ValidPgpKeys => "validpgpkeys", BaseList(validpgpkeys);
        Source => "source", BaseArchList(source);
        Md5Sums => "md5sums", BaseArchList(md5sums);
        Sha1Sums => "sha1sums", BaseArchList(sha1sums);
        Sha224Sums => "sha224sums", BaseArchList(sha224sums);
        Sha256Sums => "sha256sums", BaseArchList(sha256sums);
        Sha384Sums => "sha384sums", BaseArchList(sha384sums);
        Sha512Sums => "sha512sums", BaseArchList(sha512sums);
        B2Sums => "b2sums", BaseArchList(b2sums);
        MakeDepends => "makedepends", BaseArchList(makedepends);
        MakeConflicts => "makeconflicts", BaseArchList(makeconflicts);
    }
    package {
        Pkgdesc => "pkgdesc", PackageScalar(pkgdesc);
        Url => "url", PackageScalar(url);
        Priority => "priority", PackageScalar(priority);
        Install => "install", PackageScalar(install);
        Changelog => "changelog", PackageScalar(changelog);
        Arch => "arch", PackageList(arch);
        Groups => "groups", PackageList(groups);
        License => "license", PackageList(license);
        Options => "options", PackageList(options);
        Backup => "backup", PackageList(backup);
        Repology => "repology", PackageList(repology);
        Gives => "gives", PackageArchList(gives);
        Depends => "depends", PackageArchList(depends);
        CheckDepends => "checkdepends", PackageArchList(checkdepends);
        OptDepends => "optdepends", PackageArchList(optdepends);
        Pacdeps => "pacdeps", PackageArchList(pacdeps);
        CheckConflicts => "checkconflicts", PackageArchList(checkconflicts);
        Conflicts => "conflicts", PackageArchList(conflicts);
        Provides => "provides", PackageArchList(provides);
        Breaks => "breaks", PackageArchList(breaks);
        Replaces => "replaces", PackageArchList(replaces);
        Enhances => "enhances", PackageArchList(enhances);
        Recommends => "recommends", PackageArchList(recommends);
        Suggests => "suggests", PackageArchList(suggests);
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_name(s).ok_or_else(|| LineError::UnknownKey(s.to_string()))
    }
}
