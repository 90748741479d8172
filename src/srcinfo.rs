use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::merge::merge_package;
use crate::package::{EffectivePackage, Package, PackageBase};
use crate::parser::{self, ParseOptions};

/// A parsed `.SRCINFO`.
///
/// Holds the package base, the global package values declared before the
/// first `pkgname`, and one sparse record per split package in declaration
/// order. Split package records only contain what the package declares
/// itself; use [`split_package`](Srcinfo::split_package) or
/// [`split_packages`](Srcinfo::split_packages) for the merged view.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Srcinfo {
    /// Fields shared by every split package.
    pub base: PackageBase,
    /// Package values declared before the first `pkgname`.
    pub global: Package,
    /// Per split package overrides.
    pub packages: Vec<Package>,
}

impl Srcinfo {
    /// Parse `.SRCINFO` text with the default, strict, options.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcinfo::Srcinfo;
    ///
    /// let input = "\
    /// pkgbase = foo
    /// \tpkgver = 1.0
    /// \tpkgrel = 2
    /// \tarch = x86_64
    ///
    /// pkgname = foo
    /// ";
    /// let si = Srcinfo::parse(input).unwrap();
    /// assert_eq!(si.base.pkgbase, "foo");
    /// assert_eq!(si.version(), "1.0-2");
    /// ```
    pub fn parse(input: &str) -> Result<Srcinfo> {
        parser::parse(input, &ParseOptions::default())
    }

    /// Parse `.SRCINFO` text with explicit options.
    pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Srcinfo> {
        parser::parse(input, options)
    }

    /// Read and parse a `.SRCINFO` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Srcinfo> {
        Srcinfo::from_file_with(path, &ParseOptions::default())
    }

    /// Read and parse a `.SRCINFO` file with explicit options.
    pub fn from_file_with(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Srcinfo> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Srcinfo::parse_with(&data, options)
    }

    /// Full version string, `[epoch:]pkgver-pkgrel`.
    pub fn version(&self) -> String {
        let base = &self.base;
        if base.epoch.is_empty() {
            format!("{}-{}", base.pkgver, base.pkgrel)
        } else {
            format!("{}:{}-{}", base.epoch, base.pkgver, base.pkgrel)
        }
    }

    /// Declared architectures, `["any"]` when none were given.
    pub fn architectures(&self) -> &[String] {
        &self.global.arch
    }

    /// Names of the split packages in declaration order.
    pub fn pkgnames(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(|p| p.pkgname.as_str())
    }

    /// The merged view of one split package.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcinfo::Srcinfo;
    ///
    /// let si = Srcinfo::parse("\
    /// pkgbase = foo
    /// pkgver = 1
    /// pkgdesc = Foo
    /// pkgname = foo
    /// pkgname = foo-docs
    /// pkgdesc = Foo documentation
    /// ").unwrap();
    /// assert_eq!(si.split_package("foo").unwrap().pkgdesc, "Foo");
    /// assert_eq!(si.split_package("foo-docs").unwrap().pkgdesc, "Foo documentation");
    /// assert!(si.split_package("bar").is_err());
    /// ```
    pub fn split_package(&self, pkgname: &str) -> Result<EffectivePackage> {
        self.packages
            .iter()
            .find(|p| p.pkgname == pkgname)
            .map(|p| merge_package(&self.global, p))
            .ok_or_else(|| Error::PackageNotFound {
                name: pkgname.to_string(),
                pkgbase: self.base.pkgbase.clone(),
            })
    }

    /// The merged view of every split package, in declaration order.
    pub fn split_packages(&self) -> Vec<EffectivePackage> {
        self.packages
            .iter()
            .map(|p| merge_package(&self.global, p))
            .collect()
    }

    /// Render back to `.SRCINFO` text. Same as `to_string()`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Srcinfo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Srcinfo::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ArchDistroValue;

    const LINUX_CK: &str = "
# Generated by mksrcinfo v8
# Tue Jun  5 19:37:14 UTC 2018
pkgbase = linux-ck
\tpkgver = 4.16.14
\tpkgrel = 1
\turl = https://wiki.archlinux.org/index.php/Linux-ck
\tarch = x86_64
\tlicense = GPL2
\tmakedepends = kmod
\tmakedepends = inetutils
\tmakedepends = bc
\tmakedepends = libelf
\toptions = !strip
\tsource = https://www.kernel.org/pub/linux/kernel/v4.x/linux-4.16.tar.xz
\tsource = config
\tsha256sums = 63f6dc8e3c9f3a0273d5d6f4dca38a2413ca3a5f689329d05b750e4c87bb21b9
\tsha256sums = SKIP

pkgname = linux-ck
\tpkgdesc = The Linux-ck kernel and modules with the ck1 patchset featuring MuQSS CPU scheduler v0.171
\tinstall = linux.install
\tdepends = coreutils
\tdepends = linux-firmware
\tdepends = kmod
\tdepends = mkinitcpio>=0.7
\toptdepends = crda: to set the correct wireless channels of your country
\tprovides = linux-ck=4.16.14
\tbackup = etc/mkinitcpio.d/linux-ck.preset

pkgname = linux-ck-headers
\tpkgdesc = Header files and scripts for building modules for Linux-ck kernel
\tdepends = linux-ck
\tprovides = linux-ck-headers=4.16.14
\tprovides = linux-headers=4.16.14
";

    #[test]
    fn parse_linux_ck() {
        let si = Srcinfo::parse(LINUX_CK).unwrap();
        assert_eq!(si.base.pkgbase, "linux-ck");
        assert_eq!(si.version(), "4.16.14-1");
        assert_eq!(si.base.makedepends.len(), 4);
        assert_eq!(si.base.source.len(), 2);
        assert_eq!(si.base.sha256sums[1].value, "SKIP");
        assert_eq!(si.global.options, vec!["!strip"]);
        assert_eq!(si.architectures(), &["x86_64".to_string()]);
        assert_eq!(
            si.pkgnames().collect::<Vec<_>>(),
            vec!["linux-ck", "linux-ck-headers"]
        );
    }

    #[test]
    fn split_linux_ck() {
        let si = Srcinfo::parse(LINUX_CK).unwrap();
        let headers = si.split_package("linux-ck-headers").unwrap();
        assert_eq!(headers.pkgname, "linux-ck-headers");
        assert_eq!(headers.url, "https://wiki.archlinux.org/index.php/Linux-ck");
        assert_eq!(headers.license, vec!["GPL2"]);
        assert_eq!(headers.depends, vec![ArchDistroValue::new("linux-ck")]);
        assert_eq!(headers.provides.len(), 2);
        assert_eq!(headers.install, "");

        let kernel = si.split_package("linux-ck").unwrap();
        assert_eq!(kernel.install, "linux.install");
        assert_eq!(kernel.depends.len(), 4);
    }

    #[test]
    fn split_packages_in_order() {
        let si = Srcinfo::parse(LINUX_CK).unwrap();
        let all = si.split_packages();
        let names: Vec<_> = all.iter().map(|p| p.pkgname.as_str()).collect();
        assert_eq!(names, si.pkgnames().collect::<Vec<_>>());
        for pkg in &all {
            assert_eq!(&si.split_package(&pkg.pkgname).unwrap(), pkg);
        }
    }

    #[test]
    fn missing_split_package() {
        let si = Srcinfo::parse(LINUX_CK).unwrap();
        assert_eq!(
            si.split_package("_non_existing_pkg").unwrap_err(),
            Error::PackageNotFound {
                name: "_non_existing_pkg".to_string(),
                pkgbase: "linux-ck".to_string(),
            }
        );
    }

    #[test]
    fn version_without_epoch() {
        let si = Srcinfo::parse("pkgbase = foo\npkgver = 1.0\npkgrel = 2\npkgname = foo\n").unwrap();
        assert_eq!(si.version(), "1.0-2");
    }

    #[test]
    fn version_with_epoch() {
        let si = Srcinfo::parse("pkgbase = stockfish\npkgver = 8\npkgrel = 2\nepoch = 1\npkgname = stockfish\n")
            .unwrap();
        assert_eq!(si.version(), "1:8-2");
    }

    #[test]
    fn single_package_without_overrides() {
        let input = "\
pkgbase = foo
pkgver = 1.0
pkgrel = 2
pkgdesc = Foo
url = https://foo.example
arch = x86_64
license = MIT
depends = bar
pkgname = foo
";
        let si = Srcinfo::parse(input).unwrap();
        let pkg = si.split_package("foo").unwrap();
        let global = &si.global;
        assert_eq!(pkg.pkgname, "foo");
        assert_eq!(Some(pkg.pkgdesc.as_str()), global.pkgdesc.as_deref());
        assert_eq!(Some(pkg.url.as_str()), global.url.as_deref());
        assert_eq!(pkg.arch, global.arch);
        assert_eq!(pkg.license, global.license);
        assert_eq!(pkg.depends, global.depends);
    }

    #[test]
    fn empty_override_not_inherited() {
        let input = "\
pkgbase = foo
pkgver = 1
pkgdesc = Foo
arch = x86_64
depends = glibc
depends_x86_64 = lib64
license = MIT
pkgname = foo
pkgname = foo-data
pkgdesc =
depends =
license =
";
        let si = Srcinfo::parse(input).unwrap();
        let data = si.split_package("foo-data").unwrap();
        assert_eq!(data.pkgdesc, "");
        assert!(data.license.is_empty());
        assert_eq!(
            data.depends,
            vec![ArchDistroValue::new("lib64").with_arch("x86_64")]
        );

        let foo = si.split_package("foo").unwrap();
        assert_eq!(foo.pkgdesc, "Foo");
        assert_eq!(foo.depends.len(), 2);
    }

    #[test]
    fn arch_override_masks_only_that_arch() {
        let input = "\
pkgbase = foo
pkgver = 1
arch = i686
arch = x86_64
depends = common
depends_i686 = lib32
depends_x86_64 = lib64
pkgname = foo
depends_x86_64 = lib64-new
";
        let si = Srcinfo::parse(input).unwrap();
        let foo = si.split_package("foo").unwrap();
        assert_eq!(
            foo.depends,
            vec![
                ArchDistroValue::new("lib64-new").with_arch("x86_64"),
                ArchDistroValue::new("common"),
                ArchDistroValue::new("lib32").with_arch("i686"),
            ]
        );
    }

    #[test]
    fn from_str() {
        let si: Srcinfo = "pkgbase = foo\npkgver = 1\npkgname = foo\n".parse().unwrap();
        assert_eq!(si.base.pkgbase, "foo");
    }

    #[test]
    fn from_missing_file() {
        let err = Srcinfo::from_file("/nonexistent/.SRCINFO").unwrap_err();
        assert!(matches!(err, Error::Io { ref path, .. } if path == Path::new("/nonexistent/.SRCINFO")));
    }

    #[test]
    fn from_file() {
        let path = std::env::temp_dir().join(format!("srcinfo-test-{}.SRCINFO", std::process::id()));
        std::fs::write(&path, "pkgbase = foo\npkgver = 1\npkgname = foo\n").unwrap();
        let si = Srcinfo::from_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(si.unwrap().version(), "1-1");
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Srcinfo>();

        let si = std::sync::Arc::new(Srcinfo::parse(LINUX_CK).unwrap());
        let handles: Vec<_> = ["linux-ck", "linux-ck-headers"]
            .into_iter()
            .map(|name| {
                let si = std::sync::Arc::clone(&si);
                std::thread::spawn(move || si.split_package(name).unwrap().pkgname)
            })
            .collect();
        let names: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(names, vec!["linux-ck", "linux-ck-headers"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let si = Srcinfo::parse(LINUX_CK).unwrap();
        let json = serde_json::to_string(&si).unwrap();
        let back: Srcinfo = serde_json::from_str(&json).unwrap();
        assert_eq!(si, back);
    }
}
