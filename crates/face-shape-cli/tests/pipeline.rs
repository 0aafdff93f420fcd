//! Pipeline integration tests using mock ports.
//!
//! Exercises the full analysis loop (source -> landmarker -> classifier ->
//! style lookup -> output) without model files or inference.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use face_shape_core::domain::ImageInfo;
use face_shape_core::{analysis, FaceShape, StyleTable};
use face_shape_test_support::{
    LandmarkSetBuilder, MockImageSource, MockProgressSink, MockResultOutput, StaticLandmarker,
};

fn test_image(name: &str) -> ImageInfo {
    ImageInfo::new(name, image::DynamicImage::new_rgb8(64, 64))
}

fn full_table() -> StyleTable {
    StyleTable::from_json(
        r#"{
            "square": ["Textured crop"],
            "round": ["Long layers"],
            "oblong": ["Chin-length bob"],
            "heart": ["Side-swept bangs"],
            "oval": ["Layered cut"],
            "diamond": ["Wispy fringe"]
        }"#,
    )
    .unwrap()
}

#[test]
fn test_classifies_each_shape() {
    let cases = [
        (LandmarkSetBuilder::square(), FaceShape::Square),
        (LandmarkSetBuilder::round(), FaceShape::Round),
        (LandmarkSetBuilder::oblong(), FaceShape::Oblong),
        (LandmarkSetBuilder::heart(), FaceShape::Heart),
        (LandmarkSetBuilder::oval(), FaceShape::Oval),
        (LandmarkSetBuilder::diamond(), FaceShape::Diamond),
    ];

    for (landmarks, expected) in cases {
        let source = MockImageSource::new(vec![test_image("selfie.png")]);
        let landmarker = StaticLandmarker::with_landmarks(landmarks);
        let output = MockResultOutput::new();
        let progress = MockProgressSink::new();

        let outcome =
            analysis::run(&source, &landmarker, &full_table(), &output, &progress).unwrap();

        assert_eq!(outcome.classified, 1);
        assert_eq!(outcome.skipped, 0);

        let reports = output.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].shape, expected);
        assert!(!reports[0].styles.is_empty());
    }
}

#[test]
fn test_report_schema() {
    let source = MockImageSource::new(vec![test_image("selfie.png")]);
    let landmarker = StaticLandmarker::with_landmarks(LandmarkSetBuilder::oval());
    let output = MockResultOutput::new();
    let progress = MockProgressSink::new();

    analysis::run(&source, &landmarker, &full_table(), &output, &progress).unwrap();

    let report = &output.reports()[0];
    let json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(report).unwrap()).unwrap();

    assert_eq!(json["path"], "selfie.png");
    assert_eq!(json["shape"], "oval");
    assert_eq!(json["dimensions"]["width"], 64);
    assert_eq!(json["styles"][0], "Layered cut");
    assert!(json["measurements"]["height_width_ratio"].as_f64().unwrap() > 1.0);
    assert!(json["timestamp"].as_str().unwrap().contains('T'));
}

#[test]
fn test_no_face_is_skipped_not_error() {
    let source = MockImageSource::new(vec![test_image("selfie.png")]);
    let landmarker = StaticLandmarker::no_face();
    let output = MockResultOutput::new();
    let progress = MockProgressSink::new();

    let outcome =
        analysis::run(&source, &landmarker, &full_table(), &output, &progress).unwrap();

    assert_eq!(outcome.classified, 0);
    assert_eq!(outcome.skipped, 1);
    assert!(output.reports().is_empty());
    assert_eq!(progress.skip_reasons(), ["no face detected"]);
}

#[test]
fn test_missing_table_entry_yields_empty_styles() {
    // Table has no diamond entry: the report carries no recommendations
    // but the run still succeeds.
    let table = StyleTable::from_json(r#"{"oval": ["Layered cut"]}"#).unwrap();

    let source = MockImageSource::new(vec![test_image("selfie.png")]);
    let landmarker = StaticLandmarker::with_landmarks(LandmarkSetBuilder::diamond());
    let output = MockResultOutput::new();
    let progress = MockProgressSink::new();

    let outcome = analysis::run(&source, &landmarker, &table, &output, &progress).unwrap();

    assert_eq!(outcome.classified, 1);
    let reports = output.reports();
    assert_eq!(reports[0].shape, FaceShape::Diamond);
    assert!(reports[0].styles.is_empty());
}

#[test]
fn test_degenerate_landmarks_skipped() {
    let source = MockImageSource::new(vec![test_image("selfie.png")]);
    let landmarker = StaticLandmarker::with_landmarks(LandmarkSetBuilder::zero_width());
    let output = MockResultOutput::new();
    let progress = MockProgressSink::new();

    let outcome =
        analysis::run(&source, &landmarker, &full_table(), &output, &progress).unwrap();

    assert_eq!(outcome.classified, 0);
    assert_eq!(outcome.skipped, 1);
    assert!(progress.skip_reasons()[0].contains("zero face width"));
}

#[test]
fn test_mixed_batch_counts() {
    let source = MockImageSource::new(vec![
        test_image("a.png"),
        test_image("b.png"),
        test_image("c.png"),
    ]);
    // Every image gets the same face; all classify
    let landmarker = StaticLandmarker::with_landmarks(LandmarkSetBuilder::heart());
    let output = MockResultOutput::new();
    let progress = MockProgressSink::new();

    let outcome =
        analysis::run(&source, &landmarker, &full_table(), &output, &progress).unwrap();

    assert_eq!(outcome.classified, 3);
    assert_eq!(landmarker.call_count(), 3);
    assert_eq!(progress.classified_count(), 3);
    assert_eq!(progress.finished_counts(), Some((3, 0)));
    assert_eq!(output.flush_count(), 1);
}

#[test]
fn test_empty_source() {
    let source = MockImageSource::empty();
    let landmarker = StaticLandmarker::no_face();
    let output = MockResultOutput::new();
    let progress = MockProgressSink::new();

    let outcome =
        analysis::run(&source, &landmarker, &full_table(), &output, &progress).unwrap();

    assert_eq!(outcome.classified, 0);
    assert_eq!(outcome.skipped, 0);
    assert_eq!(progress.finished_counts(), Some((0, 0)));
}
