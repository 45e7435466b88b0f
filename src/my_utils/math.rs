use imageproc::point::Point;

use crate::models::card::MyPoint;

/// 一维高斯核, 核宽固定不随sigma变化, 权重归一化到和为1
/// sigma很大时退化成近似均值核, 正好用来抹掉卡面细节
pub fn gaussian_kernel(ksize: u8, sigma: f32) -> Vec<f32> {
    let ksize = ksize.max(1) as i32;
    // 核宽必须是奇数
    let ksize = if ksize % 2 == 0 { ksize + 1 } else { ksize };
    let half = ksize / 2;

    let mut kernel: Vec<f32> = (-half..=half)
        .map(|i| (-((i * i) as f32) / (2.0 * sigma * sigma)).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }
    kernel
}

/// 鞋带公式求轮廓围成的面积
pub fn contour_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0i64;
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        sum += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }
    (sum.abs() as f64) / 2.0
}

/// 四个顶点按左上/右上/右下/左下排序
/// 左上x+y最小, 右下x+y最大, 右上x-y最大, 左下x-y最小
pub fn sort_quad_corners(mut points: [MyPoint; 4]) -> [MyPoint; 4] {
    points.sort_by_key(|p| p.x + p.y);
    let lt = points[0];
    let rd = points[3];

    points.sort_by_key(|p| p.x - p.y);
    let ld = points[0];
    let rt = points[3];

    [lt, rt, rd, ld]
}
