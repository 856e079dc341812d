use std::{
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use patternfit_core::{Gender, catalog};
use patternfit_fitting::{
    FittingError, FittingSession, Photo, PhotoError, SelectionDraft, SelectionError, Stage,
    Tailor, TryOnRequest, prompt,
};
use patternfit_measure::{Estimator, EstimatorConfig, Measure, NoJitter};
use patternfit_wardrobe::{MemoryStore, Wardrobe};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("model unavailable")]
struct Unavailable;

/// Records requests and answers with canned output.
#[derive(Default)]
struct MockTailor {
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    fail_try_on: bool,
    fail_feedback: bool,
}

impl Tailor for MockTailor {
    type Error = Unavailable;

    async fn try_on(&self, request: &TryOnRequest) -> Result<Vec<u8>, Unavailable> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt(request));
        tokio::time::sleep(Duration::from_millis(20)).await;
        if self.fail_try_on {
            return Err(Unavailable);
        }
        Ok(vec![0xff, 0xd8, 0xff])
    }

    async fn feedback(&self, _request: &TryOnRequest) -> Result<String, Unavailable> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        if self.fail_feedback {
            return Err(Unavailable);
        }
        Ok("The waist will be snug.".into())
    }
}

fn female_draft() -> SelectionDraft {
    SelectionDraft::new()
        .gender(Gender::Female)
        .style(catalog::find_style("iro-buba").unwrap())
        .fabric(catalog::find_fabric("ankara").unwrap())
        .height_inches(68.0)
}

fn photo() -> Photo {
    Photo::new(vec![0; 2048], "image/jpeg")
}

fn session(tailor: MockTailor) -> FittingSession<MockTailor, NoJitter> {
    FittingSession::with_estimator(tailor, Estimator::new(NoJitter))
}

#[tokio::test]
async fn runs_a_female_fitting() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut session = session(MockTailor::default());
    let result = session.run(female_draft(), photo()).await.unwrap();

    assert_eq!(result.style.id, "iro-buba");
    assert_eq!(result.measurements.gender(), Gender::Female);
    assert_eq!(result.measurements.len(), 14);
    assert_eq!(result.measurements.get(Measure::Waist), Some(30.6));
    assert_eq!(result.image, [0xff, 0xd8, 0xff]);
    assert_eq!(result.feedback, "The waist will be snug.");

    let tailor = session.tailor();
    assert_eq!(tailor.calls.load(Ordering::SeqCst), 2);
    let prompts = tailor.prompts.lock().unwrap();
    assert!(prompts[0].contains("Iro and Buba"));
    assert!(prompts[0].contains("- Waist: 30.6 in"));
}

#[tokio::test(start_paused = true)]
async fn tailor_calls_run_concurrently() {
    let config = EstimatorConfig::default()
        .with_seed(7)
        .with_latency(Duration::from_millis(100));
    let mut session = FittingSession::from_config(MockTailor::default(), &config);

    let start = tokio::time::Instant::now();
    session.run(female_draft(), photo()).await.unwrap();

    // Latency plus one 20 ms call, not two.
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(120), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(140), "{elapsed:?}");
}

#[tokio::test]
async fn bad_inputs_skip_the_tailor() {
    let mut session = session(MockTailor::default());

    let incomplete = SelectionDraft::new().gender(Gender::Male);
    let err = session.run(incomplete, photo()).await.unwrap_err();
    assert!(matches!(
        err,
        FittingError::Selection(SelectionError::Incomplete("style"))
    ));
    assert!(err.is_input_error());

    let pdf = Photo::new(vec![1], "application/pdf");
    let err = session.run(female_draft(), pdf).await.unwrap_err();
    assert!(matches!(
        err,
        FittingError::Photo(PhotoError::NotAnImage { .. })
    ));

    assert_eq!(session.tailor().calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn tailor_failures_name_the_stage() {
    let mut failing = session(MockTailor {
        fail_feedback: true,
        ..MockTailor::default()
    });
    let err = failing.run(female_draft(), photo()).await.unwrap_err();
    assert!(matches!(err, FittingError::Tailor { stage: Stage::Feedback, .. }));
    assert!(!err.is_input_error());

    let mut both = session(MockTailor {
        fail_try_on: true,
        fail_feedback: true,
        ..MockTailor::default()
    });
    let err = both.run(female_draft(), photo()).await.unwrap_err();
    assert!(matches!(err, FittingError::Tailor { stage: Stage::TryOn, .. }));
    assert_eq!(err.to_string(), "tailor failed to produce the try-on image");
}

#[tokio::test]
async fn saves_result_to_wardrobe() {
    let mut session = session(MockTailor::default());
    let mut wardrobe = Wardrobe::new(MemoryStore::new());

    let result = session.run(female_draft(), photo()).await.unwrap();
    let outcome = session.save(&result, &mut wardrobe).unwrap();
    assert!(outcome.evicted.is_empty());

    let saved = wardrobe.list().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].style.id, "iro-buba");
    assert_eq!(saved[0].fabric.name, "Ankara");
    assert_eq!(saved[0].measurements, result.measurements);
    assert_eq!(saved[0].generated_image, result.image);
}
