use image::GrayImage;

use super::dataset::ReferenceLibrary;
use super::engine::Engine;
use crate::error::{CardError, Result};
use crate::models::rec_result::MatchResult;
use crate::my_utils::image::{absolute_difference, count_binary_white};

pub trait RecMatch {
    fn rec_match(card: &GrayImage, library: &ReferenceLibrary) -> Result<MatchResult>;
}

impl RecMatch for Engine {
    /// 矫正后的卡面和库里每张规范图做逐像素差, 差值图的白色计数作为距离
    /// 距离严格更小才替换, 距离相同保留先遍历到的标签
    fn rec_match(card: &GrayImage, library: &ReferenceLibrary) -> Result<MatchResult> {
        if library.is_empty() {
            return Err(CardError::EmptyReferenceLibrary);
        }

        let mut best: Option<MatchResult> = None;
        for (label, reference) in library.iter() {
            let diff = absolute_difference(card, reference);
            let distance = count_binary_white(&diff);

            let replace = match &best {
                None => true,
                Some(current) => distance < current.distance,
            };
            if replace {
                best = Some(MatchResult {
                    label: label.clone(),
                    distance,
                });
            }
        }

        best.ok_or(CardError::EmptyReferenceLibrary)
    }
}
