use thiserror::Error;

pub type Result<T> = std::result::Result<T, CardError>;

/// 识别流程中可区分的失败类型
/// 整图级别的错误直接终止, 单个候选区域的错误跳过该区域继续
#[derive(Error, Debug)]
pub enum CardError {
    /// 查询图片无法解码, 整图级别
    #[error("failed to decode query image {path}")]
    ImageDecode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    /// 一个候选区域都没找到, 整图级别
    #[error("no card-like regions located (requested {requested})")]
    RegionNotFound { requested: usize },

    /// 候选区域化简后不是四边形, 区域级别
    #[error("region does not reduce to a quadrilateral: {reason}")]
    NonQuadrilateralRegion { reason: String },

    /// 参照卡牌库为空, 没有可比对的对象
    #[error("reference library is empty, nothing to match against")]
    EmptyReferenceLibrary,
}
