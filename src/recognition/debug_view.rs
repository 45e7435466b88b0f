use image::GrayImage;

/// 调试观察接口, 只消费流水线的中间产物, 不回写任何状态
/// 所有方法默认空实现
pub trait PipelineView {
    fn on_preprocessed(&self, _img: &GrayImage) {}
    fn on_candidate(&self, _index: usize, _card: &GrayImage) {}
    fn on_difference(&self, _index: usize, _label: &str, _diff: &GrayImage) {}
}

/// 把中间图存到目录里, 替代原来的交互式调试窗口
pub struct SaveView {
    dir: String,
}

impl SaveView {
    pub fn new(dir: &str) -> Self {
        std::fs::create_dir_all(dir).ok();
        SaveView {
            dir: dir.to_string(),
        }
    }
}

impl PipelineView for SaveView {
    fn on_preprocessed(&self, img: &GrayImage) {
        img.save(format!("{}/preprocessed.jpg", self.dir)).ok();
    }

    fn on_candidate(&self, index: usize, card: &GrayImage) {
        card.save(format!("{}/card_{index}.jpg", self.dir)).ok();
    }

    fn on_difference(&self, index: usize, label: &str, diff: &GrayImage) {
        diff.save(format!("{}/diff_{index}_{label}.jpg", self.dir)).ok();
    }
}
