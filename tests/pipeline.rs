//! Integration tests for the full preprocessing pipeline.

use tsumugi::analysis::text_transform::TextStage;
use tsumugi::analysis::text_transform::unicode_normalize::UnicodeNormalizer;
use tsumugi::analysis::token_transform::TokenStage;
use tsumugi::analysis::token_transform::stopword::StopwordFilter;
use tsumugi::analysis::tokenizer::TokenizerKind;
use tsumugi::dataset::{DatasetPreprocessor, FieldTransformer, TransformedColumn};
use tsumugi::error::{Result, TsumugiError};
use tsumugi::index::indexer::Indexer;
use tsumugi::index::vocabulary::UNKNOWN_ID;
use tsumugi::preprocessor::Preprocessor;
use tempfile::TempDir;

fn japanese_preprocessor(min_df: usize) -> Result<Preprocessor> {
    Ok(Preprocessor::new(
        TokenizerKind::for_language("ja")?,
        Indexer::new(min_df),
    )
    .add_text_stage(TextStage::UnicodeNormalizer(UnicodeNormalizer::nfkc())))
}

#[test]
fn test_preprocess_round_trip_through_snapshot() -> Result<()> {
    // Two text columns of the same dataset, fit jointly
    let summary = vec![
        "こんにちは、世界".to_string(),
        "映画の感想".to_string(),
    ];
    let text = vec![
        "今日は良い天気です。".to_string(),
        "とても面白い映画でした。".to_string(),
    ];

    let mut preprocessor = japanese_preprocessor(0)?;
    preprocessor.fit_fields(&[summary.as_slice(), text.as_slice()])?;

    // Persist, then continue with the reloaded instance
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("preprocessor.json");
    preprocessor.save(&path)?;
    let preprocessor = Preprocessor::load(&path)?;

    for column in [&summary, &text] {
        let transformed = preprocessor.transform(column)?;
        let inversed = preprocessor.inverse_transform(&transformed)?;

        assert_eq!(inversed.len(), column.len());
        for (original, tokens) in column.iter().zip(&inversed) {
            assert_eq!(original, &tokens.concat());
        }
    }

    Ok(())
}

#[test]
fn test_fit_is_deterministic() -> Result<()> {
    let corpus = vec![
        "猫が好きです。".to_string(),
        "犬も好きです。".to_string(),
    ];

    let mut first = japanese_preprocessor(0)?;
    let mut second = japanese_preprocessor(0)?;
    first.fit(&corpus)?;
    second.fit(&corpus)?;

    assert_eq!(
        first.indexer().vocabulary()?,
        second.indexer().vocabulary()?
    );
    Ok(())
}

#[test]
fn test_round_trip_on_known_tokens() -> Result<()> {
    let corpus = vec!["東京から大阪まで".to_string()];
    let mut preprocessor = japanese_preprocessor(0)?;
    preprocessor.fit(&corpus)?;

    let vocab = preprocessor.indexer().vocabulary()?;
    for token in ["東京", "から", "大阪", "まで"] {
        assert!(vocab.contains(token));
        let id = vocab.id(token).unwrap();
        let inversed = preprocessor.inverse_transform_one(&[id])?;
        assert_eq!(inversed, vec![token.to_string()]);
    }
    Ok(())
}

#[test]
fn test_unfitted_preprocessor_fails() -> Result<()> {
    let preprocessor = japanese_preprocessor(0)?;

    assert!(matches!(
        preprocessor.transform(&["テスト".to_string()]),
        Err(TsumugiError::NotFitted(_))
    ));
    assert!(matches!(
        preprocessor.inverse_transform(&[vec![0]]),
        Err(TsumugiError::NotFitted(_))
    ));
    Ok(())
}

#[test]
fn test_min_df_cutoff() -> Result<()> {
    // "映画" appears in two documents, "退屈" in one
    let corpus = vec![
        "映画は退屈だった".to_string(),
        "映画を見る".to_string(),
    ];

    let mut preprocessor = japanese_preprocessor(2)?;
    preprocessor.fit(&corpus)?;

    let vocab = preprocessor.indexer().vocabulary()?;
    assert!(vocab.contains("映画"));
    assert!(!vocab.contains("退屈"));

    let ids = preprocessor.transform_one("退屈")?;
    assert_eq!(ids, vec![UNKNOWN_ID]);

    // Raising min_df can only shrink the vocabulary
    let mut sizes = Vec::new();
    for min_df in 0..4 {
        let mut preprocessor = japanese_preprocessor(min_df)?;
        preprocessor.fit(&corpus)?;
        sizes.push(preprocessor.indexer().vocabulary()?.len());
    }
    assert!(sizes.windows(2).all(|w| w[0] >= w[1]));

    Ok(())
}

#[test]
fn test_shared_multi_field_vocabulary() -> Result<()> {
    let review = vec!["a great movie".to_string()];
    let comment = vec!["the movie was long".to_string()];

    let mut preprocessor = Preprocessor::new(
        TokenizerKind::for_language("en")?,
        Indexer::new(2),
    )
    .add_token_stage(TokenStage::StopwordFilter(StopwordFilter::english()));
    preprocessor.fit_fields(&[review.as_slice(), comment.as_slice()])?;

    let vocab = preprocessor.indexer().vocabulary()?;
    // "movie" appears once per field; df counts across the union of rows
    assert_eq!(vocab.doc_freq("movie"), 2);
    assert!(vocab.contains("movie"));
    assert!(!vocab.contains("great"));

    // One consistent id regardless of which field the token came from
    let from_review = preprocessor.transform(&review)?;
    let from_comment = preprocessor.transform(&comment)?;
    let movie_id = vocab.id("movie").unwrap();
    assert!(from_review[0].contains(&movie_id));
    assert!(from_comment[0].contains(&movie_id));

    Ok(())
}

#[test]
fn test_persistence_equivalence() -> Result<()> {
    let corpus = vec![
        "この本は面白い".to_string(),
        "あの本はつまらない".to_string(),
    ];
    let mut original = japanese_preprocessor(0)?;
    original.fit(&corpus)?;

    let restored = Preprocessor::from_snapshot_json(&original.to_snapshot_json()?)?;

    let inputs = ["この本は面白い", "知らない文章", ""];
    for input in inputs {
        let expected = original.transform_one(input)?;
        assert_eq!(restored.transform_one(input)?, expected);
        assert_eq!(
            restored.inverse_transform_one(&expected)?,
            original.inverse_transform_one(&expected)?
        );
    }

    Ok(())
}

#[test]
fn test_indexed_dataset_fields() -> Result<()> {
    // Field mapping in the spirit of a transformed tabular dataset: labels
    // pass through, reviews go through a jointly fitted pipeline.
    let labels = vec!["positive".to_string(), "negative".to_string()];
    let reviews = vec![
        "this movie was great".to_string(),
        "the plot was thin".to_string(),
    ];
    let comments = vec![
        "watched it twice".to_string(),
        "fell asleep halfway".to_string(),
    ];

    let mut preprocessor = Preprocessor::new(
        TokenizerKind::for_language("en")?,
        Indexer::new(0),
    )
    .add_text_stage(TextStage::UnicodeNormalizer(UnicodeNormalizer::nfkc()))
    .add_token_stage(TokenStage::StopwordFilter(StopwordFilter::english()));
    preprocessor.fit_fields(&[reviews.as_slice(), comments.as_slice()])?;

    let mut dataset = DatasetPreprocessor::new();
    dataset.insert("label", FieldTransformer::Passthrough);
    dataset.insert("review", FieldTransformer::Pipeline(preprocessor));

    let label_column = dataset.transform_field("label", &labels)?;
    assert_eq!(label_column, TransformedColumn::Raw(labels));

    let review_column = dataset.transform_field("review", &reviews)?;
    let ids = match review_column {
        TransformedColumn::Indexed(ids) => ids,
        other => panic!("Expected indexed column, got {other:?}"),
    };

    let inversed = dataset.inverse_transform_field("review", &ids)?;
    // Stop words are gone, the rest comes back in order
    assert_eq!(inversed[0], vec!["movie", "great"]);
    assert_eq!(inversed[1], vec!["plot", "thin"]);

    // A field without a transformer is an error, not a silent pass-through
    assert!(matches!(
        dataset.transform_field("comment", &comments),
        Err(TsumugiError::Field(_))
    ));

    Ok(())
}
