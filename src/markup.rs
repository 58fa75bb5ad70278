// Sidebar and debug panel markup. Pure functions of the store/tuning so the
// page can be re-rendered wholesale after every action.

use std::fmt::Write;

use cab_core::{
    ConfiguratorStore, Family, MaterialId, SceneTuning, SubPanel, TuningParam, ViewMode, Zone,
    LETTER_ZONES,
};

/// Data attributes the delegated sidebar listener understands.
pub const SIDEBAR_CONTROLS: [&str; 5] = ["zone", "sub", "material", "view", "action"];

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn class_list(base: &str, flags: &[(&str, bool)]) -> String {
    let mut out = base.to_string();
    for (name, on) in flags {
        if *on {
            out.push(' ');
            out.push_str(name);
        }
    }
    out
}

pub fn swatch_style(material: MaterialId) -> String {
    let entry = material.entry();
    match entry.texture {
        Some(url) => format!(
            "background-image:url('{}');background-size:cover;background-color:#{:06X}",
            url, entry.color
        ),
        None => format!("background-color:#{:06X}", entry.color),
    }
}

fn view_section(out: &mut String, view: ViewMode) {
    out.push_str("<section class=\"panel views\"><h3>VIEW</h3><div class=\"row\">");
    for v in ViewMode::ALL {
        _ = write!(
            out,
            "<button class=\"{}\" data-view=\"{}\">{}</button>",
            class_list("view-btn", &[("active", v == view)]),
            v.id(),
            v.label()
        );
    }
    out.push_str("</div></section>");
}

fn zone_section(out: &mut String, store: &ConfiguratorStore) {
    let selected = store.selected_zone();
    out.push_str("<section class=\"panel zones\"><h3>ZONES</h3><div class=\"zone-grid\">");
    for zone in LETTER_ZONES {
        let is_selected = selected == Some(zone);
        let contains_selected =
            selected.is_some_and(|s| s != zone && s.wall().is_some() && s.wall() == zone.wall());
        _ = write!(
            out,
            "<button class=\"{}\" data-zone=\"{}\" title=\"{}\">{}</button>",
            class_list(
                "zone-btn",
                &[("selected", is_selected), ("contains-selected", contains_selected)]
            ),
            zone,
            escape(zone.description()),
            zone
        );
    }
    out.push_str("</div>");

    if let Some(wall) = store.active_wall() {
        _ = write!(
            out,
            "<div class=\"sub-panels\"><span class=\"label\">Wall {} panels</span><div class=\"row\">",
            wall.letter()
        );
        for panel in SubPanel::ALL {
            let zone = Zone::WallPanel(wall, panel);
            _ = write!(
                out,
                "<button class=\"{}\" data-sub=\"{}\" title=\"{} {}\">{}</button>",
                class_list("sub-btn", &[("selected", selected == Some(zone))]),
                panel.number(),
                escape(zone.description()),
                panel.number(),
                zone
            );
        }
        out.push_str("</div></div>");
    }
    out.push_str("</section>");
}

fn info_section(out: &mut String, store: &ConfiguratorStore) {
    out.push_str("<section class=\"panel info\">");
    match (store.selected_zone(), store.selected_material()) {
        (Some(zone), Some(material)) => {
            _ = write!(
                out,
                "<div class=\"selected-zone\"><strong>{}</strong> {}</div>\
                 <div class=\"selected-material\">{}</div>",
                zone,
                escape(zone.description()),
                escape(material.name())
            );
        }
        _ => out.push_str("<div class=\"hint\">Select a zone to choose its finish</div>"),
    }
    out.push_str("</section>");
}

fn material_section(out: &mut String, store: &ConfiguratorStore) {
    let disabled = store.selected_zone().is_none();
    let current = store.selected_material();
    out.push_str("<section class=\"panel materials\"><h3>MATERIALS</h3>");
    for family in Family::ALL {
        _ = write!(
            out,
            "<h4>{}</h4><div class=\"swatches\">",
            escape(family.title())
        );
        for m in MaterialId::in_family(family) {
            _ = write!(
                out,
                "<button class=\"{}\" data-material=\"{}\" title=\"{}\" style=\"{}\"><span>{}</span></button>",
                class_list(
                    "swatch",
                    &[("disabled", disabled), ("active", current == Some(m))]
                ),
                m.id(),
                escape(m.name()),
                swatch_style(m),
                escape(m.name())
            );
        }
        out.push_str("</div>");
    }
    out.push_str("</section>");
}

fn review_section(out: &mut String, store: &ConfiguratorStore) {
    out.push_str("<section class=\"panel review\"><h3>REVIEW</h3><ul>");
    for (zone, material) in store.configuration().entries() {
        _ = write!(
            out,
            "<li data-zone=\"{}\"><b>{}</b> {}</li>",
            zone,
            zone,
            escape(material.name())
        );
    }
    out.push_str("</ul><button class=\"reset-btn\" data-action=\"reset\">Reset</button></section>");
}

pub fn sidebar_html(store: &ConfiguratorStore) -> String {
    let mut out = String::with_capacity(8 * 1024);
    view_section(&mut out, store.view_mode());
    zone_section(&mut out, store);
    info_section(&mut out, store);
    material_section(&mut out, store);
    review_section(&mut out, store);
    out
}

/// Slider rows for every tuning parameter. Each input carries `data-param`
/// and a sibling `<output id="tune-{key}">` for the live value.
pub fn debug_panel_html(tuning: &SceneTuning) -> String {
    let mut out = String::from("<h3>SCENE TUNING</h3>");
    for param in TuningParam::ALL {
        let range = param.range();
        let key = param.key();
        let value = tuning.get(param);
        _ = write!(
            out,
            "<label class=\"tune-row\"><span>{}</span>\
             <input type=\"range\" data-param=\"{}\" min=\"{}\" max=\"{}\" step=\"{}\" value=\"{}\">\
             <output id=\"tune-{}\">{}</output></label>",
            escape(&param.label()),
            key,
            range.min,
            range.max,
            range.step,
            value,
            key,
            format_value(param, value)
        );
    }
    out.push_str("<button class=\"reset-btn\" data-action=\"reset-tuning\">Defaults</button>");
    out
}

pub fn format_value(param: TuningParam, value: f32) -> String {
    if param.is_toggle() {
        if value >= 0.5 { "on" } else { "off" }.to_string()
    } else {
        format!("{value:.2}")
    }
}
