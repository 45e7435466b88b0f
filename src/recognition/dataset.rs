use std::collections::BTreeMap;

use image::{DynamicImage, GrayImage};

use super::engine::Engine;
use super::preprocess::Preprocess;
use crate::config::ImageProcess;

/// 参照卡牌库: 标签到规范图的有序映射
/// 启动时构建一次之后只读, 显式传给引擎, 不做全局状态
#[derive(Debug, Clone, Default)]
pub struct ReferenceLibrary {
    entries: BTreeMap<String, GrayImage>,
}

impl ReferenceLibrary {
    pub fn new() -> Self {
        ReferenceLibrary {
            entries: BTreeMap::new(),
        }
    }

    /// 每张图过一遍预处理后入库
    /// 标签重复时后写的覆盖先写的, 空输入得到空库
    pub fn from_images<I>(images: I, args: &ImageProcess) -> Self
    where
        I: IntoIterator<Item = (String, DynamicImage)>,
    {
        let mut library = ReferenceLibrary::new();
        for (label, img) in images {
            let normalized = Engine::preprocess_image(&img, args);
            library.insert(label, normalized);
        }
        library
    }

    pub fn insert(&mut self, label: String, normalized: GrayImage) {
        self.entries.insert(label, normalized);
    }

    pub fn get(&self, label: &str) -> Option<&GrayImage> {
        self.entries.get(label)
    }

    /// 按标签顺序遍历, 与目录扫描顺序无关
    pub fn iter(&self) -> impl Iterator<Item = (&String, &GrayImage)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
