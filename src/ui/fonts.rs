use egui::epaint::text::{FontData, FontInsert, FontPriority, InsertFontFamily};
use font_kit::{
    family_name::FamilyName, handle::Handle, properties::Properties, source::SystemSource,
};
use log::{debug, info, warn};
use std::fs::read;

// egui's bundled fonts have no CJK glyphs.
const CJK_FAMILIES: &[&str] = &[
    "Microsoft YaHei",
    "SimHei",
    "SimSun",
    "PingFang SC",
    "Heiti SC",
    "Noto Sans CJK SC",
    "Noto Sans SC",
    "Source Han Sans CN",
    "WenQuanYi Zen Hei",
];

pub fn install_cjk_font(ctx: &egui::Context) {
    match load_font_family(CJK_FAMILIES) {
        Some((name, bytes)) => {
            info!("Using '{}' for Chinese text", name);
            ctx.add_font(FontInsert::new(
                "cjk",
                FontData::from_owned(bytes),
                vec![
                    InsertFontFamily {
                        family: egui::FontFamily::Proportional,
                        priority: FontPriority::Lowest,
                    },
                    InsertFontFamily {
                        family: egui::FontFamily::Monospace,
                        priority: FontPriority::Lowest,
                    },
                ],
            ));
        }
        None => warn!(
            "No CJK font found (tried {}); Chinese labels may not render",
            CJK_FAMILIES.join(", ")
        ),
    }
}

fn load_font_family(family_names: &[&'static str]) -> Option<(&'static str, Vec<u8>)> {
    let source = SystemSource::new();

    for &name in family_names {
        match source.select_best_match(&[FamilyName::Title(name.to_string())], &Properties::new()) {
            Ok(Handle::Memory { bytes, .. }) => return Some((name, bytes.to_vec())),
            Ok(Handle::Path { path, .. }) => match read(&path) {
                Ok(data) => return Some((name, data)),
                Err(e) => debug!("Could not read font file {:?}: {}", path, e),
            },
            Err(e) => debug!("Font '{}' not available: {:?}", name, e),
        }
    }

    None
}
