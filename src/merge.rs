//! Resolution of split packages against the global package record.

use std::collections::HashSet;

use crate::package::{EffectivePackage, Package};
use crate::value::ArchDistroValue;

/// Merge a sparse split package record onto the global record.
///
/// - Scalars: the split value wins when set, including an explicit clear.
/// - Plain lists: replaced wholesale when the split package declares any
///   entry.
/// - Architecture qualified lists: merged per architecture, see
///   [`merge_arch_list`].
///
/// Empty overrides never survive into the result.
pub(crate) fn merge_package(global: &Package, split: &Package) -> EffectivePackage {
    EffectivePackage {
        pkgname: split.pkgname.clone(),
        pkgdesc: merge_scalar(&global.pkgdesc, &split.pkgdesc),
        url: merge_scalar(&global.url, &split.url),
        priority: merge_scalar(&global.priority, &split.priority),
        install: merge_scalar(&global.install, &split.install),
        changelog: merge_scalar(&global.changelog, &split.changelog),
        arch: merge_list(&global.arch, &split.arch),
        groups: merge_list(&global.groups, &split.groups),
        license: merge_list(&global.license, &split.license),
        options: merge_list(&global.options, &split.options),
        backup: merge_list(&global.backup, &split.backup),
        repology: merge_list(&global.repology, &split.repology),
        gives: merge_arch_list(&global.gives, &split.gives),
        depends: merge_arch_list(&global.depends, &split.depends),
        checkdepends: merge_arch_list(&global.checkdepends, &split.checkdepends),
        optdepends: merge_arch_list(&global.optdepends, &split.optdepends),
        pacdeps: merge_arch_list(&global.pacdeps, &split.pacdeps),
        checkconflicts: merge_arch_list(&global.checkconflicts, &split.checkconflicts),
        conflicts: merge_arch_list(&global.conflicts, &split.conflicts),
        provides: merge_arch_list(&global.provides, &split.provides),
        breaks: merge_arch_list(&global.breaks, &split.breaks),
        replaces: merge_arch_list(&global.replaces, &split.replaces),
        enhances: merge_arch_list(&global.enhances, &split.enhances),
        recommends: merge_arch_list(&global.recommends, &split.recommends),
        suggests: merge_arch_list(&global.suggests, &split.suggests),
    }
}

fn merge_scalar(global: &Option<String>, split: &Option<String>) -> String {
    split.as_ref().or(global.as_ref()).cloned().unwrap_or_default()
}

fn merge_list(global: &[String], split: &[String]) -> Vec<String> {
    let source = if split.is_empty() { global } else { split };
    source.iter().filter(|v| !v.is_empty()).cloned().collect()
}

/// Merge an architecture qualified list.
///
/// Every architecture the split package mentions (unqualified counting as
/// its own key) hides all global entries for that architecture, even when
/// the split entry is an empty override. Split entries come first, then the
/// global entries that were not hidden, each in declaration order.
pub(crate) fn merge_arch_list(
    global: &[ArchDistroValue],
    split: &[ArchDistroValue],
) -> Vec<ArchDistroValue> {
    let overridden: HashSet<Option<&str>> = split.iter().map(|v| v.arch.as_deref()).collect();

    split
        .iter()
        .filter(|v| !v.is_empty_override())
        .chain(
            global
                .iter()
                .filter(|v| !overridden.contains(&v.arch.as_deref()))
                .filter(|v| !v.is_empty_override()),
        )
        .cloned()
        .collect()
}
