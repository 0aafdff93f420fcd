//! Analysis pipeline: image source -> landmarks -> classification -> styles.

use anyhow::Result;
use tracing::{debug, warn};

use crate::domain::{classify, ImageDimensions, ShapeReport, StyleTable};
use crate::ports::{FaceLandmarker, ImageSource, ProgressEvent, ProgressSink, ResultOutput};

/// Counters from a pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOutcome {
    /// Photos classified successfully.
    pub classified: usize,
    /// Photos skipped (load failure, no face, degenerate landmarks).
    pub skipped: usize,
}

/// Runs the classification pipeline over all images from `source`.
///
/// Each photo is loaded, passed to the landmarker, classified, and matched
/// against the style table. Failures on individual photos are reported as
/// skips and never abort the run; a photo with no face is a skip with a
/// user-visible reason, not an error.
///
/// # Errors
///
/// Returns an error only if writing results fails.
pub fn run(
    source: &dyn ImageSource,
    landmarker: &dyn FaceLandmarker,
    styles: &StyleTable,
    output: &dyn ResultOutput,
    progress: &dyn ProgressSink,
) -> Result<AnalysisOutcome> {
    let total = source.count_hint();
    let mut classified = 0usize;
    let mut skipped = 0usize;

    for (index, image_result) in source.images().enumerate() {
        let image = match image_result {
            Ok(img) => img,
            Err(e) => {
                progress.on_event(ProgressEvent::Skipped {
                    path: format!("image {index}"),
                    reason: format!("{e:#}"),
                });
                skipped += 1;
                continue;
            }
        };

        let path = image.path.clone();

        progress.on_event(ProgressEvent::Started {
            path: path.clone(),
            index,
            total,
        });

        let landmarks = match landmarker.landmarks(&image) {
            Ok(Some(landmarks)) => landmarks,
            Ok(None) => {
                debug!("No face detected in {path}");
                progress.on_event(ProgressEvent::Skipped {
                    path,
                    reason: "no face detected".into(),
                });
                skipped += 1;
                continue;
            }
            Err(e) => {
                warn!("Landmark detection failed for {path}: {e:#}");
                progress.on_event(ProgressEvent::Skipped {
                    path,
                    reason: format!("{e:#}"),
                });
                skipped += 1;
                continue;
            }
        };

        let (shape, measurements) = match classify(&landmarks) {
            Ok(result) => result,
            Err(e) => {
                warn!("Classification failed for {path}: {e:#}");
                progress.on_event(ProgressEvent::Skipped {
                    path,
                    reason: format!("{e:#}"),
                });
                skipped += 1;
                continue;
            }
        };

        // An absent table entry means no recommendations, not a failure.
        let recommendations = styles.lookup(shape).map(<[String]>::to_vec).unwrap_or_default();
        if recommendations.is_empty() {
            debug!("No style recommendations for {shape}");
        }

        let report = ShapeReport {
            path,
            timestamp: iso_timestamp(),
            dimensions: ImageDimensions::new(image.width, image.height),
            shape,
            measurements,
            styles: recommendations,
        };

        progress.on_event(ProgressEvent::Classified {
            report: report.clone(),
        });

        output.write(&report)?;
        classified += 1;
    }

    output.flush()?;

    progress.on_event(ProgressEvent::Finished {
        classified,
        skipped,
    });

    Ok(AnalysisOutcome {
        classified,
        skipped,
    })
}

/// Generates an ISO 8601 UTC timestamp (RFC 3339 format).
fn iso_timestamp() -> String {
    match time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339) {
        Ok(ts) => ts,
        Err(e) => {
            debug!("Timestamp format failed: {e}");
            String::from("1970-01-01T00:00:00Z")
        }
    }
}
