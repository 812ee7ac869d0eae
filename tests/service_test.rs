mod common;

use std::sync::Arc;
use std::thread;

use common::{
    encode_png, novel_photo, oversized_jpeg_header, pattern_image, write_image, FailingModel, FixedModel,
};
use ecosort::{
    Category, ClassificationService, ClassifierError, KnownImageIndex, Language, LocalizationStore, MatchSource,
    ReferenceCatalog, ServiceError,
};

/// Reference directory with one image per built-in prefix group.
fn reference_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_image(dir.path(), "plastic_bag1.jpg", &pattern_image(1));
    write_image(dir.path(), "plastic_bottle1.jpg", &pattern_image(2));
    write_image(dir.path(), "lithium_battery1.jpg", &pattern_image(3));
    write_image(dir.path(), "aerosol_spray1.jpg", &pattern_image(4));
    dir
}

fn service_with(dir: &tempfile::TempDir, scores: Vec<f32>) -> ClassificationService {
    let (index, report) = KnownImageIndex::build(&ReferenceCatalog::builtin(dir.path()));
    assert_eq!(report.loaded, 4);
    ClassificationService::new(index, Box::new(FixedModel::new(scores)), LocalizationStore::builtin())
}

#[test]
fn test_reference_images_match_with_full_confidence() {
    let dir = reference_dir();
    let service = service_with(&dir, vec![0.25, 0.25, 0.25, 0.25]);

    for (file, category) in [
        ("plastic_bag1.jpg", Category::PlasticBag),
        ("plastic_bottle1.jpg", Category::PlasticBottle),
        ("lithium_battery1.jpg", Category::LithiumBattery),
        ("aerosol_spray1.jpg", Category::AerosolSprays),
    ] {
        let bytes = std::fs::read(dir.path().join(file)).unwrap();
        let result = service.classify(&bytes, "en").unwrap();
        assert_eq!(result.category, category, "{}", file);
        assert_eq!(result.source, MatchSource::Catalog);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.waste_type, category.key());
    }
}

#[test]
fn test_reference_image_in_other_format_still_matches() {
    let dir = reference_dir();
    let service = service_with(&dir, vec![0.25, 0.25, 0.25, 0.25]);

    // PNG re-encode of the pixels the index hashed
    let decoded = image::open(dir.path().join("lithium_battery1.jpg")).unwrap().to_rgb8();
    let result = service.classify(&encode_png(&decoded), "kn").unwrap();
    assert_eq!(result.category, Category::LithiumBattery);
    assert_eq!(result.confidence, 1.0);
    assert_eq!(result.waste_type, "ಲಿಥಿಯಂ ಬ್ಯಾಟರಿ");
}

#[test]
fn test_hindi_battery_scenario() {
    let dir = reference_dir();
    let service = service_with(&dir, vec![0.25, 0.25, 0.25, 0.25]);

    let bytes = std::fs::read(dir.path().join("lithium_battery1.jpg")).unwrap();
    let result = service.classify(&bytes, "hi").unwrap();

    assert_eq!(result.waste_type, "लिथियम बैटरी");
    assert_eq!(result.confidence, 1.0);
    let expected = LocalizationStore::builtin().lookup_language(Language::Hindi, Category::LithiumBattery);
    assert_eq!(result.guidance, expected.guidance);
    assert_eq!(
        result.guidance.disposal_tip,
        "नियमित कचरे में न फेंकें; निर्दिष्ट बैटरी रीसाइक्लिंग केंद्रों में ले जाएं।"
    );
}

#[test]
fn test_novel_image_uses_model() {
    let dir = reference_dir();
    let service = service_with(&dir, vec![0.1, 0.15, 0.05, 0.7]);

    let result = service.classify(&encode_png(&novel_photo()), "en").unwrap();
    assert_eq!(result.source, MatchSource::Model);
    assert_eq!(result.category, Category::AerosolSprays);
    assert!(result.confidence > 0.0 && result.confidence < 1.0);
    assert!((result.confidence - 0.7).abs() < 1e-6);
    assert_eq!(result.waste_type, "aerosol sprays");
}

#[test]
fn test_novel_image_always_yields_valid_category() {
    let dir = reference_dir();
    let store = LocalizationStore::builtin();
    for scores in [
        vec![5.0, -2.0, 0.0, 1.0],
        vec![-1.0, -1.0, -1.0, -0.5],
        vec![0.0, 0.0, 0.0, 0.0],
        vec![0.4, 0.3, 0.2, 0.1],
    ] {
        let service = service_with(&dir, scores);
        for language in Language::ALL {
            let result = service.classify(&encode_png(&novel_photo()), language.code()).unwrap();
            assert!(Category::ALL.contains(&result.category));
            assert!((0.0..=1.0).contains(&result.confidence));
            let names: Vec<String> = Category::ALL
                .iter()
                .map(|&c| store.lookup_language(language, c).display_name)
                .collect();
            assert!(names.contains(&result.waste_type));
        }
    }
}

#[test]
fn test_unknown_language_falls_back_to_english() {
    let dir = reference_dir();
    let service = service_with(&dir, vec![0.25, 0.25, 0.25, 0.25]);

    let bytes = std::fs::read(dir.path().join("plastic_bag1.jpg")).unwrap();
    let result = service.classify(&bytes, "xx").unwrap();
    assert_eq!(result.waste_type, "plastic bag");
    assert_eq!(result.guidance.disposal_tip, "Dispose of by reusing or recycling at designated drop-off points.");
}

#[test]
fn test_malformed_bytes_are_a_decode_error() {
    let dir = reference_dir();
    let service = service_with(&dir, vec![0.25, 0.25, 0.25, 0.25]);

    assert!(matches!(service.classify(b"\x89PNG garbage", "en"), Err(ServiceError::Decode(_))));
    assert!(matches!(service.classify(&[], "en"), Err(ServiceError::Decode(_))));
}

#[test]
fn test_huge_declared_dimensions_are_a_decode_error() {
    let dir = reference_dir();
    let service = service_with(&dir, vec![0.25, 0.25, 0.25, 0.25]);

    let bytes = oversized_jpeg_header();
    assert_eq!(bytes.len(), 23);
    assert!(matches!(service.classify(&bytes, "en"), Err(ServiceError::Decode(_))));

    // the service keeps working afterwards
    let reference = std::fs::read(dir.path().join("plastic_bag1.jpg")).unwrap();
    assert_eq!(service.classify(&reference, "en").unwrap().category, Category::PlasticBag);
}

#[test]
fn test_classifier_failure_is_reported() {
    let service = ClassificationService::new(
        KnownImageIndex::new(),
        Box::new(FailingModel::default()),
        LocalizationStore::builtin(),
    );
    let result = service.classify(&encode_png(&novel_photo()), "en");
    assert!(matches!(result, Err(ServiceError::Classifier(_))));
}

#[test]
fn test_model_with_wrong_output_size_is_reported() {
    let service = ClassificationService::new(
        KnownImageIndex::new(),
        Box::new(FixedModel::new(vec![0.001; 1000])),
        LocalizationStore::builtin(),
    );
    match service.classify(&encode_png(&novel_photo()), "en") {
        Err(ServiceError::Classifier(ClassifierError::ScoreCount { expected, actual })) => {
            assert_eq!((expected, actual), (4, 1000));
        }
        other => panic!("unexpected result {:?}", other.map(|r| r.category)),
    }
}

#[test]
fn test_catalog_hit_does_not_need_a_working_model() {
    let dir = reference_dir();
    let (index, _) = KnownImageIndex::build(&ReferenceCatalog::builtin(dir.path()));
    let service = ClassificationService::new(index, Box::new(FailingModel::default()), LocalizationStore::builtin());

    let bytes = std::fs::read(dir.path().join("aerosol_spray1.jpg")).unwrap();
    let result = service.classify(&bytes, "en").unwrap();
    assert_eq!(result.category, Category::AerosolSprays);
}

#[test]
fn test_concurrent_classification() {
    let dir = reference_dir();
    let service = Arc::new(service_with(&dir, vec![0.1, 0.6, 0.2, 0.1]));
    let reference = std::fs::read(dir.path().join("plastic_bottle1.jpg")).unwrap();
    let novel = encode_png(&novel_photo());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            let bytes = if i % 2 == 0 { reference.clone() } else { novel.clone() };
            thread::spawn(move || service.classify(&bytes, "en").unwrap())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(result.category, Category::PlasticBottle);
            assert_eq!(result.source, MatchSource::Catalog);
        } else {
            assert_eq!(result.category, Category::PlasticBag);
            assert_eq!(result.source, MatchSource::Model);
        }
    }
}
