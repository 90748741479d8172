use srcinfo::{ArchDistroValue, Srcinfo};

const EXAMPLE: &str = "\
pkgbase = libc++
\tpkgver = 6.0.0
\tpkgrel = 1
\turl = https://libcxx.llvm.org/
\tarch = i686
\tarch = x86_64
\tlicense = MIT
\tlicense = custom:University of Illinois/NCSA Open Source License
\tmakedepends = clang
\tmakedepends = cmake
\tmakedepends = ninja
\tdepends = gcc-libs
\tnoextract = llvm-6.0.0.src.tar.xz
\tvalidpgpkeys = 11E521D646982372EB577A1F8F0871F202119294
\tsource = https://releases.llvm.org/6.0.0/llvm-6.0.0.src.tar.xz
\tsource = https://releases.llvm.org/6.0.0/libcxx-6.0.0.src.tar.xz
\tsha512sums = SKIP
\tsha512sums = SKIP

pkgname = libc++
\tpkgdesc = LLVM C++ standard library.
\tdepends = libc++abi=6.0.0-1

pkgname = libc++abi
\tpkgdesc = Low level support for the LLVM C++ standard library.

pkgname = libc++experimental
\tpkgdesc = LLVM C++ experimental library.
\tdepends = libc++=6.0.0-1
";

fn format_values(values: &[ArchDistroValue]) -> String {
    values
        .iter()
        .map(|v| match v.arch {
            Some(ref arch) => format!("{} [{}]", v.value, arch),
            None => v.value.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() {
    let si = Srcinfo::parse(EXAMPLE).expect("failed to parse srcinfo");

    println!("=== Package Base ===");
    println!("Pkgbase:      {}", si.base.pkgbase);
    println!("Version:      {}", si.version());
    println!("Arch:         {}", si.architectures().join(" "));
    println!("Makedepends:  {}", format_values(&si.base.makedepends));
    println!("Sources:      {}", si.base.source.len());

    for pkg in si.split_packages() {
        println!("\n=== {} ===", pkg.pkgname);
        println!("Description:  {}", pkg.pkgdesc);
        println!("URL:          {}", pkg.url);
        println!("License:      {}", pkg.license.join(", "));
        println!("Depends:      {}", format_values(&pkg.depends));
    }

    println!("\n=== Rendered Back ===");
    print!("{si}");
}
