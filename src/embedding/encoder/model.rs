use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_core::IndexOp;
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use std::path::Path;

/// BERT-family encoder pooled into sentence vectors.
pub(crate) struct BertSentenceEncoder {
    bert: BertModel,
    config: Config,
    device: Device,
}

impl BertSentenceEncoder {
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_path = model_dir.join("config.json");
        let weights_path = model_dir.join("model.safetensors");

        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), &config)?
        } else if vb.contains_tensor("roberta.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("roberta"), &config)?
        } else {
            BertModel::load(vb, &config)?
        };

        Ok(Self {
            bert,
            config,
            device: device.clone(),
        })
    }

    pub fn hidden_size(&self) -> usize {
        self.config.hidden_size
    }

    /// Runs the transformer over one unpadded token sequence and mean-pools
    /// the token states into the first `dim` components of a sentence vector.
    ///
    /// Inputs are encoded one sequence at a time, so every position is a real
    /// token and the pool needs no attention-mask weighting.
    pub fn encode_tokens(&self, tokens: &[u32], type_ids: &[u32], dim: usize) -> Result<Vec<f32>> {
        let input_ids = Tensor::new(tokens, &self.device)?.unsqueeze(0)?;
        let token_type_ids = Tensor::new(type_ids, &self.device)?.unsqueeze(0)?;

        // hidden shape: [1, seq_len, hidden_size]
        let hidden = self.bert.forward(&input_ids, &token_type_ids, None)?;
        let pooled = hidden.mean(1)?;

        pooled.i((0, ..dim))?.to_vec1::<f32>()
    }
}
