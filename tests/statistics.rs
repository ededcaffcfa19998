// Native integration tests for the statistics view, drawn onto a recording
// surface instead of a canvas.

mod common;

use common::{Op, Recorder, approx, approx_rect};
use wizard_views::StatisticsLayout;
use wizard_views::geometry::Point;
use wizard_views::statistics::{BarKind, render_statistics_view};

fn render(names: &[&str], times: &[f64]) -> (Recorder, wizard_views::statistics::StatisticsView) {
    let mut rec = Recorder::new();
    let view = render_statistics_view(&mut rec, StatisticsLayout::standard(), names, times)
        .expect("recorder never fails");
    (rec, view)
}

#[test]
fn cloud_is_drawn_before_histogram() {
    let (rec, _) = render(&["Вы", "Иван"], &[1000.0, 2000.0]);
    assert_eq!(rec.ops[0], Op::FillStyle("rgba(0, 0, 0, 0.7)".to_string()));
    assert!(matches!(rec.ops[1], Op::StrokeRect(_)));
    assert!(matches!(rec.ops[2], Op::FillRect(_)));
    assert_eq!(
        rec.ops[3],
        Op::FillStyle("rgba(255, 255, 255, 1.0)".to_string())
    );
    assert_eq!(rec.ops[6], Op::FillStyle("#000".to_string()));
    assert_eq!(rec.ops[7], Op::Font("16px PT Mono".to_string()));

    let texts = rec.texts();
    assert_eq!(texts[0], ("Ура, вы победили!", Point::new(120.0, 40.0)));
    assert_eq!(texts[1], ("Список результатов:", Point::new(120.0, 60.0)));
}

#[test]
fn two_player_example_matches_expected_layout() {
    let (rec, view) = render(&["Вы", "Иван"], &[1000.0, 2000.0]);
    let h = &view.histogram;
    assert_eq!(h.min_value, Some(1000.0));
    assert_eq!(h.max_value, Some(2000.0));
    assert_eq!(h.bars[0].opacity(), 1.0);
    assert_eq!(h.bars[1].opacity(), 1.0);

    // two cloud rects, then one per bar
    let rects = rec.filled_rects();
    assert_eq!(rects.len(), 4);
    assert!(approx_rect(rects[2], 145.0, 212.0, 40.0, 30.0), "{:?}", rects[2]);
    assert!(approx_rect(rects[3], 235.0, 92.0, 40.0, 150.0), "{:?}", rects[3]);

    let texts = rec.texts();
    assert_eq!(texts.len(), 6);
    assert_eq!(texts[2].0, "Вы");
    assert_eq!(texts[2].1, Point::new(145.0, 260.0));
    assert_eq!(texts[3].0, "1000");
    assert!(approx(texts[3].1.y, 204.0));
    assert_eq!(texts[4].0, "Иван");
    assert_eq!(texts[5].0, "2000");
    assert!(approx(texts[5].1.y, 84.0));
}

#[test]
fn reversed_times_dim_the_faster_member() {
    let (rec, view) = render(&["Вы", "Иван"], &[2000.0, 1000.0]);
    assert_eq!(view.histogram.bars[1].opacity(), 0.5);
    assert!(
        rec.ops
            .contains(&Op::FillStyle("rgba(0, 0, 155, 0.5)".to_string()))
    );
}

#[test]
fn each_bar_resets_histogram_text_style() {
    let (rec, _) = render(&["Вы", "Иван", "Юлия"], &[1500.0, 2500.0, 1800.0]);
    let fonts = rec
        .ops
        .iter()
        .filter(|op| **op == Op::Font("14px PT Mono".to_string()))
        .count();
    assert_eq!(fonts, 3);
}

#[test]
fn bar_positions_strictly_increase_by_pitch() {
    let names = ["Вы", "Иван", "Юлия", "Мария", "Кристоф"];
    let times = [3000.0, 1000.0, 4200.0, 2500.0, 5100.0];
    let (_, view) = render(&names, &times);
    let geometry = view.histogram.bar_geometry();
    for pair in geometry.windows(2) {
        assert!(approx(pair[1].rect.x() - pair[0].rect.x(), 90.0));
    }
}

#[test]
fn only_the_player_name_gets_the_player_bar() {
    let (_, view) = render(&["Иван", "Вы", "Юлия"], &[1.0, 2.0, 3.0]);
    let kinds: Vec<BarKind> = view.histogram.bars.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![BarKind::Member, BarKind::Player, BarKind::Member]);
    assert!(approx(view.histogram.bars[0].opacity(), 1.0 / 3.0));
}

#[test]
fn extra_names_are_dropped() {
    let (rec, view) = render(&["Вы", "Иван", "Юлия"], &[1000.0, 2000.0]);
    assert_eq!(view.histogram.bars.len(), 2);
    assert!(!rec.texts().iter().any(|(t, _)| *t == "Юлия"));
}

#[test]
fn empty_input_draws_only_the_cloud() {
    let (rec, view) = render(&[], &[]);
    assert!(view.histogram.bars.is_empty());
    assert_eq!(rec.filled_rects().len(), 2);
    assert_eq!(rec.texts().len(), 2);
}

#[test]
fn canvas_error_stops_rendering() {
    let mut rec = Recorder::failing_at_text(1);
    let res = render_statistics_view(
        &mut rec,
        StatisticsLayout::standard(),
        &["Вы"],
        &[1000.0],
    );
    assert!(res.is_err());
    // first message line made it, nothing from the histogram did
    assert_eq!(rec.texts().len(), 1);
    assert_eq!(rec.filled_rects().len(), 2);
}

#[test]
fn custom_layout_moves_the_histogram() {
    let mut layout = StatisticsLayout::default();
    layout.histogram.origin = Point::new(0.0, 200.0);
    layout.member_bar.distance = 10.0;
    let mut rec = Recorder::new();
    let view = render_statistics_view(&mut rec, &layout, &["Иван", "Юлия"], &[100.0, 200.0]).unwrap();
    let xs: Vec<f64> = view.histogram.bar_geometry().iter().map(|g| g.rect.x()).collect();
    assert_eq!(xs, vec![10.0, 70.0]);
}
