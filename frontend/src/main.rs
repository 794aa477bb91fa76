use moonzoon_novytree::*;
use serde_json::json;
use zoon::*;

/// Entry point: restores the persisted theme and mounts the demo.
pub fn main() {
    init_theme();
    start_app("app", root);
}

fn root() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Padding::all(SPACING_24))
        .s(Gap::new().y(SPACING_16))
        .s(Background::new().color_signal(neutral_1()))
        .item(header())
        .item(demo_tree())
}

fn header() -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(SPACING_16))
        .s(Align::new().center_y())
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_20)
                    .weight(FontWeight::Number(FONT_WEIGHT_6))
                    .color_signal(neutral_11()))
                .child("NovyTree demo"),
        )
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_16).color_signal(primary_6()))
                .child("click a row to expand, the square to select"),
        )
        .item(theme_button())
}

fn theme_button() -> impl Element {
    Button::new()
        .s(Padding::new().x(SPACING_12).y(SPACING_4))
        .s(RoundedCorners::all(4))
        .s(Background::new().color("transparent"))
        .s(Borders::all_signal(
            neutral_4().map(|color| Border::new().width(1).color(color)),
        ))
        .s(Font::new()
            .size(FONT_SIZE_14)
            .weight(FontWeight::Number(FONT_WEIGHT_5))
            .color_signal(primary_7()))
        .s(Cursor::new(CursorIcon::Pointer))
        .label_signal(theme().map(|t| {
            Text::new(match t {
                Theme::Light => "Dark theme",
                Theme::Dark => "Light theme",
            })
        }))
        .on_press(toggle_theme)
}

fn demo_tree() -> impl Element {
    tree_view()
        .data(json!([
            {
                "text": "Projects",
                "state": { "expanded": true },
                "customData": { "kind": "folder" },
                "nodes": [
                    {
                        "text": "NovyWave",
                        "color": "#2f6fde",
                        "customData": { "kind": "app" }
                    },
                    {
                        "text": "NovyUI",
                        "showSelect": true,
                        "nodes": [
                            { "text": "treeview", "showSelect": true },
                            { "text": "tokens", "showSelect": true }
                        ]
                    }
                ]
            },
            {
                "text": "Scratch",
                "backgroundColor": "#f8f9fa",
                "showBorder": false
            }
        ]))
        .default_color("#212529")
        .default_background_color("#ffffff")
        .on_expand(|summary, snapshot| {
            zoon::println!(
                "expand: {} ({} root nodes in snapshot)",
                summary.text,
                snapshot.len()
            );
        })
        .on_select(|summary, _snapshot| {
            zoon::println!("select: {}", summary.text);
        })
        .aria_label("Demo tree")
        .build()
}
