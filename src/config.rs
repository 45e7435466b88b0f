use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

/// 图片预处理参数
#[derive(Debug, Deserialize, Serialize)]
pub struct ImageProcess {
    pub gaussian_blur_kernel: u8,
    pub gaussian_blur_sigma: f32,
    pub binarization_threshold: u8,
    pub canonical_w: u32,
    pub canonical_h: u32,
}

/// 找卡牌候选区域参数
#[derive(Debug, Deserialize, Serialize)]
pub struct RegionLocate {
    pub canny_low_threshold: f32,
    pub canny_high_threshold: f32,
    pub expected_cards: usize,
}

/// 透视矫正参数
#[derive(Debug, Deserialize, Serialize)]
pub struct CardRectify {
    pub poly_simplify_factor: f64,
    pub card_square_size: u32,
}

/// 参照卡牌库参数
#[derive(Debug, Deserialize, Serialize)]
pub struct Dataset {
    pub reference_dir: String,
}

/// 配置参数
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub image_process: ImageProcess,
    pub region_locate: RegionLocate,
    pub card_rectify: CardRectify,
    pub dataset: Dataset,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            image_process: ImageProcess {
                gaussian_blur_kernel: 3,
                gaussian_blur_sigma: 100.0,
                binarization_threshold: 200,
                canonical_w: 450,
                canonical_h: 480,
            },
            region_locate: RegionLocate {
                canny_low_threshold: 120.0,
                canny_high_threshold: 240.0,
                expected_cards: 1,
            },
            card_rectify: CardRectify {
                poly_simplify_factor: 0.1,
                card_square_size: 450,
            },
            dataset: Dataset {
                reference_dir: "training_set".to_string(),
            },
        }
    }
}

// 全局配置单例, 有config.yaml优先用文件, 没有就用内置默认值
pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    match File::open("config.yaml") {
        Ok(file) => {
            let reader = BufReader::new(file);
            serde_yaml::from_reader(reader).expect("Failed to parse config")
        }
        Err(_) => Config::default(),
    }
});
