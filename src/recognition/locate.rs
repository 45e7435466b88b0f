use std::cmp::Ordering;

use image::GrayImage;
use imageproc::contours::{find_contours, Contour};
use imageproc::edges::canny;

use super::engine::Engine;
use crate::config::RegionLocate;
use crate::my_utils::math::contour_area;

pub trait LocateCards {
    fn locate_cards(img: &GrayImage, count: usize, args: &RegionLocate) -> Vec<Contour<i32>>;
}

impl LocateCards for Engine {
    /// 在规范图里找卡牌形状的候选区域
    /// 返回按面积从大到小的前count个轮廓, 不足count时有多少返回多少
    fn locate_cards(img: &GrayImage, count: usize, args: &RegionLocate) -> Vec<Contour<i32>> {
        // 边缘检测
        let edge_map = canny(img, args.canny_low_threshold, args.canny_high_threshold);

        // 提取轮廓, 保留嵌套层级信息
        let mut contours: Vec<Contour<i32>> = find_contours(&edge_map);

        // 在实际提取出的轮廓序列上排序, 面积大的在前
        contours.sort_by(|c1, c2| {
            contour_area(&c2.points)
                .partial_cmp(&contour_area(&c1.points))
                .unwrap_or(Ordering::Equal)
        });

        // 截断到期望的卡牌数量, 越界由调用方按实际长度防御
        contours.truncate(count);
        contours
    }
}
