/*
    输出结构
*/

use serde::{Deserialize, Serialize};

/// 单张卡牌的最近邻比对结果
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub label: String,
    /// 差值图中白色像素的个数, 越小越相似
    pub distance: u32,
}

/// 每个检出区域一条记录, 区域级别的失败记录在error里不中断整体流程
#[derive(Debug, Serialize, Deserialize)]
pub struct CardOutput {
    pub index: usize,
    pub result: Option<MatchResult>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct OutputRec {
    pub cards: Vec<CardOutput>,
}

impl OutputRec {
    pub fn new() -> Self {
        OutputRec { cards: Vec::new() }
    }

    /// 成功比对上的区域数量
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.result.is_some()).count()
    }
}
