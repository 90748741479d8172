use std::fmt;

use crate::package::Package;
use crate::srcinfo::Srcinfo;
use crate::value::ArchDistroValue;

/// Formats the `.SRCINFO` the way `makepkg --printsrcinfo` lays it out.
///
/// Fields are written in a fixed order. The preamble holds the package base
/// and the global package values:
///
/// ```text
/// pkgdesc pkgver pkgrel epoch url install changelog arch groups license
/// gives checkdepends makedepends depends optdepends provides conflicts
/// checkconflicts makeconflicts replaces breaks enhances recommends suggests
/// priority mask incompatible compatible maintainer repology noextract
/// nosubmodules options backup validpgpkeys source md5sums sha1sums
/// sha224sums sha256sums sha384sums sha512sums b2sums pacdeps
/// ```
///
/// Each split package block, preceded by a blank line, holds its overrides:
///
/// ```text
/// pkgdesc url install changelog arch groups license gives checkdepends
/// depends optdepends provides conflicts checkconflicts replaces breaks
/// enhances recommends suggests priority options backup repology pacdeps
/// ```
///
/// Unset fields are omitted. Empty overrides are written as `key = ` so
/// they survive a round trip.
impl fmt::Display for Srcinfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let base = &self.base;
        let pkg = &self.global;

        header(f, "pkgbase", &base.pkgbase)?;

        scalar(f, "pkgdesc", pkg.pkgdesc.as_deref())?;
        non_empty(f, "pkgver", &base.pkgver)?;
        non_empty(f, "pkgrel", &base.pkgrel)?;
        non_empty(f, "epoch", &base.epoch)?;
        scalar(f, "url", pkg.url.as_deref())?;
        scalar(f, "install", pkg.install.as_deref())?;
        scalar(f, "changelog", pkg.changelog.as_deref())?;
        list(f, "arch", &pkg.arch)?;
        list(f, "groups", &pkg.groups)?;
        list(f, "license", &pkg.license)?;
        arch_list(f, "gives", &pkg.gives)?;
        arch_list(f, "checkdepends", &pkg.checkdepends)?;
        arch_list(f, "makedepends", &base.makedepends)?;
        arch_list(f, "depends", &pkg.depends)?;
        arch_list(f, "optdepends", &pkg.optdepends)?;
        arch_list(f, "provides", &pkg.provides)?;
        arch_list(f, "conflicts", &pkg.conflicts)?;
        arch_list(f, "checkconflicts", &pkg.checkconflicts)?;
        arch_list(f, "makeconflicts", &base.makeconflicts)?;
        arch_list(f, "replaces", &pkg.replaces)?;
        arch_list(f, "breaks", &pkg.breaks)?;
        arch_list(f, "enhances", &pkg.enhances)?;
        arch_list(f, "recommends", &pkg.recommends)?;
        arch_list(f, "suggests", &pkg.suggests)?;
        scalar(f, "priority", pkg.priority.as_deref())?;
        list(f, "mask", &base.mask)?;
        list(f, "incompatible", &base.incompatible)?;
        list(f, "compatible", &base.compatible)?;
        list(f, "maintainer", &base.maintainer)?;
        list(f, "repology", &pkg.repology)?;
        list(f, "noextract", &base.noextract)?;
        list(f, "nosubmodules", &base.nosubmodules)?;
        list(f, "options", &pkg.options)?;
        list(f, "backup", &pkg.backup)?;
        list(f, "validpgpkeys", &base.validpgpkeys)?;
        arch_list(f, "source", &base.source)?;
        arch_list(f, "md5sums", &base.md5sums)?;
        arch_list(f, "sha1sums", &base.sha1sums)?;
        arch_list(f, "sha224sums", &base.sha224sums)?;
        arch_list(f, "sha256sums", &base.sha256sums)?;
        arch_list(f, "sha384sums", &base.sha384sums)?;
        arch_list(f, "sha512sums", &base.sha512sums)?;
        arch_list(f, "b2sums", &base.b2sums)?;
        arch_list(f, "pacdeps", &pkg.pacdeps)?;

        for pkg in &self.packages {
            writeln!(f)?;
            write_package(f, pkg)?;
        }

        Ok(())
    }
}

fn write_package(f: &mut fmt::Formatter, pkg: &Package) -> fmt::Result {
    header(f, "pkgname", &pkg.pkgname)?;

    scalar(f, "pkgdesc", pkg.pkgdesc.as_deref())?;
    scalar(f, "url", pkg.url.as_deref())?;
    scalar(f, "install", pkg.install.as_deref())?;
    scalar(f, "changelog", pkg.changelog.as_deref())?;
    list(f, "arch", &pkg.arch)?;
    list(f, "groups", &pkg.groups)?;
    list(f, "license", &pkg.license)?;
    arch_list(f, "gives", &pkg.gives)?;
    arch_list(f, "checkdepends", &pkg.checkdepends)?;
    arch_list(f, "depends", &pkg.depends)?;
    arch_list(f, "optdepends", &pkg.optdepends)?;
    arch_list(f, "provides", &pkg.provides)?;
    arch_list(f, "conflicts", &pkg.conflicts)?;
    arch_list(f, "checkconflicts", &pkg.checkconflicts)?;
    arch_list(f, "replaces", &pkg.replaces)?;
    arch_list(f, "breaks", &pkg.breaks)?;
    arch_list(f, "enhances", &pkg.enhances)?;
    arch_list(f, "recommends", &pkg.recommends)?;
    arch_list(f, "suggests", &pkg.suggests)?;
    scalar(f, "priority", pkg.priority.as_deref())?;
    list(f, "options", &pkg.options)?;
    list(f, "backup", &pkg.backup)?;
    list(f, "repology", &pkg.repology)?;
    arch_list(f, "pacdeps", &pkg.pacdeps)
}

fn header(f: &mut fmt::Formatter, key: &str, value: &str) -> fmt::Result {
    if value.is_empty() {
        return Ok(());
    }
    writeln!(f, "{key} = {value}")
}

fn field(f: &mut fmt::Formatter, key: impl fmt::Display, value: &str) -> fmt::Result {
    writeln!(f, "\t{key} = {value}")
}

/// Base scalars have no override semantics: empty means unset.
fn non_empty(f: &mut fmt::Formatter, key: &str, value: &str) -> fmt::Result {
    if value.is_empty() {
        return Ok(());
    }
    field(f, key, value)
}

fn scalar(f: &mut fmt::Formatter, key: &str, value: Option<&str>) -> fmt::Result {
    match value {
        Some(value) => field(f, key, value),
        None => Ok(()),
    }
}

fn list(f: &mut fmt::Formatter, key: &str, values: &[String]) -> fmt::Result {
    values.iter().try_for_each(|value| field(f, key, value))
}

fn arch_list(f: &mut fmt::Formatter, key: &str, values: &[ArchDistroValue]) -> fmt::Result {
    values
        .iter()
        .try_for_each(|value| field(f, value.qualified(key), &value.value))
}
