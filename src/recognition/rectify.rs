use image::{GrayImage, Luma};
use imageproc::contours::Contour;
use imageproc::geometric_transformations::{warp_into, Interpolation, Projection};
use imageproc::geometry::{approximate_polygon_dp, arc_length, min_area_rect};

use super::engine::Engine;
use crate::config::{CardRectify, ImageProcess};
use crate::error::{CardError, Result};
use crate::models::card::MyPoint;
use crate::my_utils::math::sort_quad_corners;

pub trait RectifyCard {
    fn rectify_card(
        img: &GrayImage,
        contour: &Contour<i32>,
        rectify_args: &CardRectify,
        image_args: &ImageProcess,
    ) -> Result<GrayImage>;
}

impl RectifyCard for Engine {
    /// 把一个倾斜的四边形区域透视矫正成正方形卡面图
    fn rectify_card(
        img: &GrayImage,
        contour: &Contour<i32>,
        rectify_args: &CardRectify,
        image_args: &ImageProcess,
    ) -> Result<GrayImage> {
        // 容差取周长的固定比例, 卡牌轮廓近似矩形, 宽松容差能把噪声折叠成四个角
        let perimeter = arc_length(&contour.points, true);
        let epsilon = rectify_args.poly_simplify_factor * perimeter;
        let approx = approximate_polygon_dp(&contour.points, epsilon, true);

        // 化简结果不是四边形就明确报错, 不猜
        if approx.len() != 4 {
            return Err(CardError::NonQuadrilateralRegion {
                reason: format!("simplified to {} corners", approx.len()),
            });
        }

        // 最小外接旋转矩形, 对化简不完美更鲁棒, 永远给出四个角
        let box_rect = min_area_rect(&approx);
        let corners = box_rect.map(|p| MyPoint::new(p.x, p.y));

        // 角点重排成左上/右上/右下/左下, 排错会悄悄产生镜像或旋转的卡面
        let [lt, rt, rd, ld] = sort_quad_corners(corners);

        let s = (rectify_args.card_square_size - 1) as f32;
        let src = [
            (lt.x as f32, lt.y as f32),
            (rt.x as f32, rt.y as f32),
            (rd.x as f32, rd.y as f32),
            (ld.x as f32, ld.y as f32),
        ];
        let dst = [(0.0, 0.0), (s, 0.0), (s, s), (0.0, s)];

        let projection = Projection::from_control_points(src, dst).ok_or_else(|| {
            CardError::NonQuadrilateralRegion {
                reason: "degenerate corner layout".to_string(),
            }
        })?;

        // 重采样到规范分辨率画布, 卡面落在左上的正方形里, 画布外采样补黑
        // 最近邻采样保证矫正图仍是二值图
        let mut card = GrayImage::new(image_args.canonical_w, image_args.canonical_h);
        warp_into(img, &projection, Interpolation::Nearest, Luma([0u8]), &mut card);

        Ok(card)
    }
}
