use std::fs;

use anyhow::{Context, Result};
use image::DynamicImage;

/// 扫描参照卡牌目录, 文件名(去扩展名)作为标签
/// 读不出来的文件直接报错, 不做静默跳过
pub fn read_reference_images(dir: &str) -> Result<Vec<(String, DynamicImage)>> {
    let mut images = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read reference dir {dir}"))?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let label = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => continue,
        };
        let img = image::open(&path)
            .with_context(|| format!("Failed to open reference image {}", path.display()))?;
        images.push((label, img));
    }

    Ok(images)
}
