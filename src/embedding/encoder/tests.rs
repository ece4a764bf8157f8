use super::*;
use std::path::PathBuf;

use crate::config::Config;
use crate::constants::{DEFAULT_BATCH_SIZE, DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN};

mod config_tests {
    use super::*;

    #[test]
    fn test_encoder_config_default() {
        let config = EncoderConfig::default();
        assert_eq!(config.embedding_dim, DEFAULT_EMBEDDING_DIM);
        assert_eq!(config.max_seq_len, DEFAULT_MAX_SEQ_LEN);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert!(!config.testing_stub);
        assert!(config.model_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_encoder_config_new_infers_tokenizer() {
        let config = EncoderConfig::new("/models/labse");
        assert_eq!(config.model_dir, PathBuf::from("/models/labse"));
        assert_eq!(
            config.tokenizer_path,
            PathBuf::from("/models/labse/tokenizer.json")
        );
        assert!(!config.testing_stub);
    }

    #[test]
    fn test_encoder_config_stub() {
        let config = EncoderConfig::stub();
        assert!(config.testing_stub);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_encoder_config_from_config_without_model_is_stub() {
        let config = EncoderConfig::from_config(&Config {
            batch_size: 4,
            ..Default::default()
        });
        assert!(config.testing_stub);
        assert_eq!(config.batch_size, 4);
    }

    #[test]
    fn test_encoder_config_from_config_with_model() {
        let config = EncoderConfig::from_config(&Config {
            model_path: Some(PathBuf::from("/models/labse")),
            tokenizer_path: Some(PathBuf::from("/tok/tokenizer.json")),
            max_seq_len: 128,
            ..Default::default()
        });
        assert!(!config.testing_stub);
        assert_eq!(config.model_dir, PathBuf::from("/models/labse"));
        assert_eq!(config.tokenizer_path, PathBuf::from("/tok/tokenizer.json"));
        assert_eq!(config.max_seq_len, 128);
    }

    #[test]
    fn test_encoder_config_validation_empty_path_no_stub() {
        let config = EncoderConfig::default();
        assert!(matches!(
            config.validate(),
            Err(EmbeddingError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_encoder_config_validation_missing_dir() {
        let config = EncoderConfig::new("/nonexistent/examr/model");
        assert!(matches!(
            config.validate(),
            Err(EmbeddingError::ModelNotFound { .. })
        ));
    }

    #[test]
    fn test_encoder_config_validation_zero_batch() {
        let config = EncoderConfig {
            batch_size: 0,
            ..EncoderConfig::stub()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_model_available_requires_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = EncoderConfig::new(dir.path());
        assert!(!config.model_available());
        assert!(!config.tokenizer_available());
    }
}

mod encoder_tests {
    use super::*;

    #[test]
    fn test_stub_encoder_loads() {
        let encoder = SentenceEncoder::stub().expect("stub should load");
        assert!(encoder.is_stub());
        assert_eq!(encoder.embedding_dim(), DEFAULT_EMBEDDING_DIM);
    }

    #[test]
    fn test_stub_encoder_embeds_in_order() {
        let encoder = SentenceEncoder::stub().unwrap();
        let vectors = encoder.embed_texts(&["alpha", "beta", "alpha"]).unwrap();

        assert_eq!(vectors.len(), 3);
        assert!(vectors.iter().all(|v| v.len() == DEFAULT_EMBEDDING_DIM));
        assert_eq!(vectors[0], vectors[2]);
        assert_ne!(vectors[0], vectors[1]);
    }

    #[test]
    fn test_stub_encoder_empty_batch() {
        let encoder = SentenceEncoder::stub().unwrap();
        assert!(encoder.embed_texts(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_stub_encoder_as_provider() {
        let encoder = SentenceEncoder::stub().unwrap();
        let inputs = vec![
            ("the result is 42 ".to_string(), LanguageCode::from("eng")),
            ("the result is 42 ".to_string(), LanguageCode::from("eng")),
        ];
        let vectors = encoder.embed(&inputs).unwrap();
        assert_eq!(vectors[0], vectors[1]);
    }

    #[test]
    fn test_model_dir_without_files_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = SentenceEncoder::load(EncoderConfig::new(dir.path())).unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelNotFound { .. }));
    }

    #[test]
    fn test_debug_output() {
        let encoder = SentenceEncoder::stub().unwrap();
        let debug = format!("{:?}", encoder);
        assert!(debug.contains("SentenceEncoder"));
        assert!(debug.contains("Stub"));
    }
}
