use image::DynamicImage;

use crate::config::CONFIG;
use crate::error::{CardError, Result};
use crate::models::rec_result::{CardOutput, OutputRec};
use crate::my_utils::image::absolute_difference;

use super::dataset::ReferenceLibrary;
use super::debug_view::PipelineView;
use super::locate::LocateCards;
use super::matcher::RecMatch;
use super::preprocess::Preprocess;
use super::rectify::RectifyCard;

pub struct Engine {
    library: ReferenceLibrary,
    view: Option<Box<dyn PipelineView>>,
}

impl Engine {
    pub fn new(library: ReferenceLibrary) -> Self {
        Engine {
            library,
            view: None,
        }
    }

    /// 挂上调试观察者, 想看中间图的时候用
    pub fn with_view(library: ReferenceLibrary, view: Box<dyn PipelineView>) -> Self {
        Engine {
            library,
            view: Some(view),
        }
    }

    /// 跨模块实现方法的时候访问不到成员变量, 需要调用此函数
    pub fn library(&self) -> &ReferenceLibrary {
        &self.library
    }

    /// 识别一张查询照片里的卡牌
    /// 整图级别的失败直接返回Err, 单个区域的失败记在对应输出行里, 继续处理剩余区域
    pub fn recognize(&self, query: &DynamicImage, num_cards: usize) -> Result<OutputRec> {
        // 空卡牌库没有可比对的对象, 提前终止
        if self.library.is_empty() {
            return Err(CardError::EmptyReferenceLibrary);
        }

        // 规范化查询图
        let normalized = Engine::preprocess_image(query, &CONFIG.image_process);
        if let Some(view) = &self.view {
            view.on_preprocessed(&normalized);
        }

        // 找候选区域, 找到多少处理多少, 一个都没有算整图失败
        let contours = Engine::locate_cards(&normalized, num_cards, &CONFIG.region_locate);
        if contours.is_empty() {
            return Err(CardError::RegionNotFound {
                requested: num_cards,
            });
        }

        let mut output = OutputRec::new();
        for (index, contour) in contours.iter().enumerate() {
            // 透视矫正, 不是四边形的区域跳过并记录原因
            let rectified = match Engine::rectify_card(
                &normalized,
                contour,
                &CONFIG.card_rectify,
                &CONFIG.image_process,
            ) {
                Ok(card) => card,
                Err(e) => {
                    output.cards.push(CardOutput {
                        index,
                        result: None,
                        error: Some(e.to_string()),
                    });
                    continue;
                }
            };
            if let Some(view) = &self.view {
                view.on_candidate(index, &rectified);
            }

            // 和参照卡牌库比对, 库在入口处已确认非空
            let result = Engine::rec_match(&rectified, &self.library)?;
            if let Some(view) = &self.view {
                if let Some(reference) = self.library.get(&result.label) {
                    view.on_difference(
                        index,
                        &result.label,
                        &absolute_difference(&rectified, reference),
                    );
                }
            }
            output.cards.push(CardOutput {
                index,
                result: Some(result),
                error: None,
            });
        }

        Ok(output)
    }
}
