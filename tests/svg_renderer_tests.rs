use rangeframe::api::PlotBuilder;
use rangeframe::core::Viewport;
use rangeframe::render::{RenderFrame, Renderer, SvgRenderer, TextHAlign, TextPrimitive};
use rangeframe::{Plot, PlotConfig};

fn sample_plot() -> Plot {
    PlotBuilder::new()
        .add_series(
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
            &[0.1, 0.2, 0.7, 0.4, 0.8, 0.6, 0.0, 0.2],
        )
        .and_then(|builder| {
            builder.add_series(
                &[10.0, 11.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0],
                &[0.7, 0.3, 0.1, 0.7, 0.9, 0.3, 0.9, 0.4],
            )
        })
        .and_then(|builder| builder.build())
        .expect("plot")
}

#[test]
fn document_has_one_frame_path_per_plot_and_one_path_per_series() {
    let svg = sample_plot().draw().expect("draw");

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 800 600""#));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches(r#"<path class="frame""#).count(), 1);
    assert_eq!(svg.matches(r#"<path class="series""#).count(), 2);
    assert_eq!(svg.matches("<text").count(), 8);
    assert_eq!(svg.matches(r#"text-anchor="middle""#).count(), 3);
    assert_eq!(svg.matches(r#"text-anchor="end""#).count(), 5);
}

#[test]
fn stylesheet_carries_stroke_and_font_size() {
    let plot = PlotBuilder::new()
        .with_config(PlotConfig::default().with_stroke_width(2.5).with_font_size(14.0))
        .add_series(&[0.0, 1.0], &[0.0, 1.0])
        .and_then(|builder| builder.build())
        .expect("plot");
    let svg = plot.draw().expect("draw");

    assert!(svg.contains("stroke-width: 2.5;"));
    assert!(svg.contains("font-size: 14px;"));
}

#[test]
fn labels_always_use_period_decimal_separator() {
    let svg = sample_plot().draw().expect("draw");
    assert!(svg.contains(">0.2</text>"));
    assert!(svg.contains(">0.8</text>"));
    assert!(!svg.contains(">0,2</text>"));
}

#[test]
fn label_text_is_escaped() {
    let frame = RenderFrame::new(Viewport::new(100, 100), 1.0, 12.0)
        .with_label(TextPrimitive::new("<a & b>", 50.0, 50.0, TextHAlign::Left));
    let mut renderer = SvgRenderer::new();
    renderer.render(&frame).expect("render");

    assert!(renderer.document().contains("&lt;a &amp; b&gt;"));
    assert!(renderer.document().contains(r#"text-anchor="start""#));
}

#[test]
fn series_paths_start_with_move_to() {
    let svg = sample_plot().draw().expect("draw");
    for line in svg.lines().filter(|line| line.starts_with(r#"<path class="series""#)) {
        assert!(line.contains(r#"d="M"#));
        assert_eq!(line.matches('M').count(), 1);
        assert_eq!(line.matches(" L").count(), 7);
    }
}
