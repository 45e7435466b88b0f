use image::imageops::{resize, FilterType};
use image::{DynamicImage, GrayImage};
use imageproc::contrast::threshold;

use super::engine::Engine;
use crate::config::ImageProcess;
use crate::my_utils::image::gaussian_blur_sized;

pub trait Preprocess {
    fn preprocess_image(img: &DynamicImage, args: &ImageProcess) -> GrayImage;
}

impl Preprocess for Engine {
    /// 任意输入图转规范图: 灰度 -> 高斯模糊 -> 二值化 -> 拉伸到固定尺寸
    fn preprocess_image(img: &DynamicImage, args: &ImageProcess) -> GrayImage {
        // 多通道图转单通道灰度图
        let gray_img = img.to_luma8();

        // 小邻域大sigma的模糊, 抹掉卡面印刷细节只留大的形状边界
        let blurred_img = gaussian_blur_sized(
            &gray_img,
            args.gaussian_blur_kernel,
            args.gaussian_blur_sigma,
        );

        // 全局阈值二值化, 之后只剩黑白两种像素, 比对只看剪影
        let binary_img = threshold(&blurred_img, args.binarization_threshold);

        // 拉伸到固定尺寸, 不保持宽高比; 最近邻采样保证结果仍是二值图
        resize(
            &binary_img,
            args.canonical_w,
            args.canonical_h,
            FilterType::Nearest,
        )
    }
}
