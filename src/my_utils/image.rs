use image::GrayImage;
use imageproc::filter::separable_filter_equal;

use super::math::gaussian_kernel;

/// 固定核宽的高斯模糊
/// gaussian_blur_f32的核宽由sigma推导, sigma=100时核会盖住整张图,
/// 这里按配置的核宽显式构造一维核再做可分离卷积
pub fn gaussian_blur_sized(img: &GrayImage, ksize: u8, sigma: f32) -> GrayImage {
    let kernel = gaussian_kernel(ksize, sigma);
    separable_filter_equal(img, &kernel)
}

/// 两张同尺寸灰度图逐像素差的绝对值
pub fn absolute_difference(a: &GrayImage, b: &GrayImage) -> GrayImage {
    debug_assert_eq!((a.width(), a.height()), (b.width(), b.height()));
    let mut out = GrayImage::new(a.width(), a.height());
    for (o, (pa, pb)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
        *o = pa.abs_diff(*pb);
    }
    out
}

/// 统计二值图中白色像素的个数
pub fn count_binary_white(img: &GrayImage) -> u32 {
    img.iter().filter(|&&p| p == 255).count() as u32
}
