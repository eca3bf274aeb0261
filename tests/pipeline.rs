//! End-to-end tests for the sheet pipeline through the public API.

use std::fs;
use std::path::Path;

use iconsheet::output::Printer;
use iconsheet::{
    build, collect_icons, lua_table, scan_style, BuildOptions, GridLayout, Rasterizer, SheetCoord,
    SheetPacker, StyleSet,
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

const CIRCLE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512"><circle cx="256" cy="256" r="256"/></svg>"#;
const BAR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 640 320"><path d="M0 0H640V320H0Z"/></svg>"#;

fn write_icons(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for (i, name) in names.iter().enumerate() {
        let svg = if i % 2 == 0 { CIRCLE } else { BAR };
        fs::write(dir.join(format!("{}.svg", name)), svg).unwrap();
    }
}

#[test]
fn test_a_b_c_on_two_column_grid() {
    let dir = tempdir().unwrap();
    write_icons(dir.path(), &["c", "b", "a"]);

    let sources = scan_style(dir.path()).unwrap();
    let icons = collect_icons(&sources, &Rasterizer::new(64).unwrap(), |_| {}).unwrap();
    let sheet = SheetPacker::new(64, 2).pack(&icons, |_| {}).unwrap();

    assert_eq!(sheet.image.dimensions(), (128, 128));
    assert_eq!(sheet.table.get("a"), Some(SheetCoord { x: 1, y: 1 }));
    assert_eq!(sheet.table.get("b"), Some(SheetCoord { x: 2, y: 1 }));
    assert_eq!(sheet.table.get("c"), Some(SheetCoord { x: 1, y: 2 }));
    assert_eq!(
        lua_table(&sheet.table),
        r#"return{["a"]={x=1,y=1},["b"]={x=2,y=1},["c"]={x=1,y=2}}"#
    );
}

#[test]
fn test_every_cell_holds_its_icon() {
    let names: Vec<String> = (0..37).map(|i| format!("icon-{:02}", i)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let dir = tempdir().unwrap();
    write_icons(dir.path(), &refs);

    let sources = scan_style(dir.path()).unwrap();
    let icons = collect_icons(&sources, &Rasterizer::new(16).unwrap(), |_| {}).unwrap();
    let sheet = SheetPacker::new(16, 8).pack(&icons, |_| {}).unwrap();

    assert_eq!(sheet.layout.rows(), 5);
    assert_eq!(sheet.image.dimensions(), (128, 80));
    assert_eq!(sheet.table.len(), 37);

    for (name, coord) in sheet.table.iter() {
        assert!((1..=8).contains(&coord.x), "{} x={}", name, coord.x);
        assert!((1..=5).contains(&coord.y), "{} y={}", name, coord.y);

        // The center of every icon is covered by both test shapes
        let cx = (coord.x - 1) * 16 + 8;
        let cy = (coord.y - 1) * 16 + 8;
        assert_eq!(sheet.image.get_pixel(cx, cy).0, [255, 255, 255, 255], "{}", name);
    }

    // Cells past the last icon are empty
    let layout = GridLayout::new(37, 16, 8).unwrap();
    let last = layout.cell(36).unwrap();
    let (x, y) = last.origin(16);
    assert_eq!(sheet.image.get_pixel(x + 16 + 8, y + 8).0, [0, 0, 0, 0]);
}

#[test]
fn test_build_writes_both_files_per_style() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("svgs");
    write_icons(&source.join("brands"), &["github", "gitlab"]);
    write_icons(&source.join("solid"), &["house"]);

    let mut styles = StyleSet::empty();
    styles.set("brands", true);
    styles.set("solid", true);
    let options = BuildOptions {
        source,
        output: dir.path().join("dist"),
        icon_size: 32,
        icons_per_row: 4,
        styles,
    };

    let reports = build(&options, &Printer::new()).unwrap();
    let built: Vec<(&str, usize)> = reports.iter().map(|r| (r.style.as_str(), r.icons)).collect();
    assert_eq!(built, vec![("brands", 2), ("solid", 1)]);

    for style in ["brands", "solid"] {
        let out = dir.path().join("dist").join(style);
        assert!(out.join("sheet.png").is_file());
        assert!(out.join("sheet.lua").is_file());
        let img = image::open(out.join("sheet.png")).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (128, 32));
    }

    let brands = fs::read_to_string(dir.path().join("dist/brands/sheet.lua")).unwrap();
    assert_eq!(brands, r#"return{["github"]={x=1,y=1},["gitlab"]={x=2,y=1}}"#);
}
