pub mod config;
pub mod error;
pub mod models;
pub mod my_utils;
pub mod recognition;

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;
    use config::CONFIG;
    use error::CardError;
    use models::rec_result::OutputRec;
    use recognition::dataset::ReferenceLibrary;
    use recognition::engine::Engine;
    use recognition::matcher::RecMatch;

    use image::{DynamicImage, GrayImage, Luma};
    use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
    use imageproc::rect::Rect;

    /// 参照卡: 全白卡面, 指定横向位置画一个黑色矩形块
    fn reference_band_card(x0: i32) -> DynamicImage {
        let mut img = GrayImage::from_pixel(450, 480, Luma([255u8]));
        draw_filled_rect_mut(&mut img, Rect::at(x0, 140).of_size(100, 200), Luma([0u8]));
        DynamicImage::ImageLuma8(img)
    }

    /// 参照卡: 全白卡面, 中心一个黑色圆
    fn reference_circle_card() -> DynamicImage {
        let mut img = GrayImage::from_pixel(450, 480, Luma([255u8]));
        draw_filled_circle_mut(&mut img, (225, 240), 90, Luma([0u8]));
        DynamicImage::ImageLuma8(img)
    }

    /// 三张图案位置互不重叠的参照卡
    fn build_library() -> ReferenceLibrary {
        let images = vec![
            ("club".to_string(), reference_band_card(40)),
            ("heart".to_string(), reference_circle_card()),
            ("spade".to_string(), reference_band_card(310)),
        ];
        ReferenceLibrary::from_images(images, &CONFIG.image_process)
    }

    /// 查询照片: 黑色背景上一张heart卡的实体照片
    /// intensity模拟不同光照下的卡面亮度
    fn heart_query_photo(intensity: u8) -> DynamicImage {
        let mut img = GrayImage::from_pixel(600, 600, Luma([0u8]));
        // 卡牌本体
        draw_filled_rect_mut(&mut img, Rect::at(150, 200).of_size(300, 200), Luma([intensity]));
        // 卡面中心的圆形图案
        draw_filled_circle_mut(&mut img, (300, 300), 60, Luma([0u8]));
        DynamicImage::ImageLuma8(img)
    }

    fn single_match_label(output: &OutputRec) -> &str {
        assert_eq!(output.cards.len(), 1);
        &output.cards[0].result.as_ref().expect("expected a match").label
    }

    #[test]
    fn test_end_to_end_single_card() -> Result<()> {
        let engine = Engine::new(build_library());

        // 同一张实体卡换了光照并转了个方向重新拍
        let photo = heart_query_photo(230).rotate180();
        let output = engine.recognize(&photo, 1)?;

        assert_eq!(single_match_label(&output), "heart");
        assert!(output.cards[0].result.as_ref().unwrap().distance > 0);
        assert_eq!(output.matched_count(), 1);

        // 输出结构可以序列化回传
        let json = serde_json::to_string(&output)?;
        let parsed: OutputRec = serde_json::from_str(&json)?;
        assert_eq!(single_match_label(&parsed), "heart");

        Ok(())
    }

    #[test]
    fn test_orientation_invariance() -> Result<()> {
        let engine = Engine::new(build_library());
        let photo = heart_query_photo(255);

        // 四个朝向都要落到同一个参照标签, 角点重排出错会在这里现形
        let rotations = [
            photo.clone(),
            photo.rotate90(),
            photo.rotate180(),
            photo.rotate270(),
        ];
        for rotated in rotations.iter() {
            let output = engine.recognize(rotated, 1)?;
            assert_eq!(single_match_label(&output), "heart");
        }

        Ok(())
    }

    #[test]
    fn test_reference_entries_match_themselves() {
        let engine = Engine::new(build_library());
        // 每张参照卡和它自己的库内规范图距离为0
        for (label, reference) in engine.library().iter() {
            let result = Engine::rec_match(reference, engine.library()).unwrap();
            assert_eq!(&result.label, label);
            assert_eq!(result.distance, 0);
        }
    }

    #[test]
    fn test_recognize_deterministic() -> Result<()> {
        let engine = Engine::new(build_library());
        let photo = heart_query_photo(255);

        let first = engine.recognize(&photo, 1)?;
        let second = engine.recognize(&photo, 1)?;
        assert_eq!(
            first.cards[0].result.as_ref().unwrap(),
            second.cards[0].result.as_ref().unwrap()
        );

        Ok(())
    }

    #[test]
    fn test_empty_library_is_fatal() {
        let engine = Engine::new(ReferenceLibrary::new());
        let photo = heart_query_photo(255);

        let result = engine.recognize(&photo, 1);
        assert!(matches!(result, Err(CardError::EmptyReferenceLibrary)));
    }

    #[test]
    fn test_blank_photo_has_no_regions() {
        let engine = Engine::new(build_library());
        let blank = DynamicImage::ImageLuma8(GrayImage::from_pixel(600, 600, Luma([0u8])));

        let result = engine.recognize(&blank, 1);
        assert!(matches!(
            result,
            Err(CardError::RegionNotFound { requested: 1 })
        ));
    }
}
