//! 定义输入输出和公用结构体

pub mod rec_result;

/// 定义常用结构体
pub mod card {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
    pub struct MyPoint {
        pub x: i32, // 引擎所有坐标点均使用i32
        pub y: i32,
    }

    impl MyPoint {
        pub fn new(x: i32, y: i32) -> Self {
            MyPoint { x, y }
        }
    }
}
