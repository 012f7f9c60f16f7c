// Copyright 2025 the Fontset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolve a partial family configuration and print every registration.

use fontset::{FamilyCollection, FamilyConfig, StyleKind};

fn main() {
    let mut collection = FamilyCollection::new();

    let config = FamilyConfig {
        regular: "Open.Sans.Regular.ttf".into(),
        bold: "Open.Sans.Bold.ttf".into(),
        base_path: "assets/fonts/".into(),
        ..FamilyConfig::empty()
    };

    let handle = collection
        .add_family(config, &mut |style: StyleKind, path: &str| {
            println!("registering {style}: {path}");
            Ok::<(), &str>(())
        })
        .unwrap();

    let family = collection.family(handle.name()).unwrap();
    let resolved = family.config();

    println!();
    println!("family {} (id {})", family.name(), family.id().to_u64());
    for &style in StyleKind::all() {
        println!("  {style}: {}", resolved.full_path(style));
    }
}
