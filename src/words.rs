use anyhow::{Context, Result};
use std::path::Path;

/// Stimulus words used when no word file is configured. Repeats are
/// intentional: each occurrence is judged on its own.
pub const DEFAULT_WORDS: &[&str] = &[
    "白痴", "疯子", "过分", "光荣", "热烈", "技巧", "变态", "停止", "恶劣", "透明", "获胜", "欢呼", "白痴", "通知", "一致",
    "规矩", "混蛋", "欢喜", "热情", "愤怒", "烦躁", "人性", "闪耀", "活泼", "垃圾", "词汇", "暴力", "中奖", "通知", "说明",
    "实际", "恶劣", "道理", "怒火", "冠军", "复仇", "透露", "凯旋", "光荣", "气死", "亲吻", "欢呼", "罪恶", "灿烂", "破坏",
    "思考", "积极", "热情", "欢呼", "可恶", "感激", "混蛋", "罪恶", "重生", "清理", "诅咒", "美满", "讨厌", "专门", "公开",
    "毁灭", "喜庆", "管理", "愤怒", "破坏", "亲吻", "想象", "专门", "垃圾", "凯旋", "专门", "讨厌", "透明", "热闹", "人性",
    "想象", "道理", "光荣", "约定", "公开", "自动", "贱人", "感激", "贱人", "灿烂", "直觉", "自动", "训练", "说明", "愚蠢",
    "精彩", "烦躁", "思考", "怒火", "气死", "管理", "道理", "闪耀", "可恶", "通知", "固定", "热爱", "恶心", "喜庆", "说明",
    "报复", "规矩", "诅咒", "透露", "侮辱", "固定", "过分", "摧毁", "疯子", "热爱", "积极", "滚蛋", "发觉", "想象", "凌辱",
    "奇迹", "精彩", "最佳", "一致", "助手", "亲吻", "不满", "滚蛋", "获胜", "公开", "暴力", "闪亮", "罪恶", "固定", "逻辑",
    "垃圾", "毁灭", "停止", "奇迹", "约定", "诅咒", "欢乐", "摧毁", "重生", "美满", "感激", "冠军", "战胜", "欢喜", "恶心",
    "美满", "发觉", "愚蠢", "热烈", "白痴", "热爱", "技巧", "暴力", "变态", "不满", "欢笑", "冷静", "清理", "中奖", "清晰",
    "侮辱", "喜庆", "关怀", "闪耀", "助手", "直觉", "关怀", "财产", "管理", "愤怒", "战胜", "复仇", "财产", "自动", "最佳",
    "兴奋", "人性", "冠军", "讨厌", "思考", "报复", "训练", "变态", "灿烂", "一致", "怒火", "欢乐", "透明", "疯子", "逻辑",
    "侮辱", "抗议", "直觉", "清晰", "技巧", "复仇", "规矩", "约定", "冷静", "愚蠢", "战胜", "兴奋", "狂欢", "过分", "实际",
    "发觉", "中奖", "抗议", "实际", "承认", "放屁", "闪亮", "不满", "停止", "凌辱", "欢笑", "烦躁", "滚蛋", "财产", "清理",
    "助手", "闪亮", "承认", "活泼", "积极", "兴奋", "逻辑", "最佳", "热闹", "遵守", "奇迹", "摧毁", "热情", "透露", "抗议",
    "贱人", "欢笑", "恶劣", "热闹", "可恶", "恶心", "热烈", "冷静", "狂欢", "重生", "关怀", "凯旋", "遵守", "精彩", "放屁",
    "遵守", "欢喜", "凌辱", "混蛋", "气死", "清晰", "报复", "承认", "狂欢", "放屁", "获胜", "破坏", "毁灭", "欢乐", "训练",
    "活泼",
];

pub fn default_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
}

/// One word per line. Blank lines and `#` comments are skipped; order and
/// duplicates are kept.
pub fn parse_word_list(content: &str) -> Vec<String> {
    // Strip BOM if present (common on Windows-created files)
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    content
        .lines()
        .map(|line| line.trim().trim_matches('\r'))
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn load_word_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read word file: {}", path.display()))?;
    let words = parse_word_list(&content);
    if words.is_empty() {
        anyhow::bail!("Word file {} contains no words", path.display());
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list_keeps_duplicates() {
        let words = default_words();
        assert_eq!(words.len(), 271);
        assert_eq!(words[0], "白痴");
        assert_eq!(words[12], "白痴");
        assert_eq!(words.last().map(String::as_str), Some("活泼"));
    }

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let words = parse_word_list("\u{feff}# practice set\n苹果\r\n\n  香蕉  \n苹果\n");
        assert_eq!(words, vec!["苹果", "香蕉", "苹果"]);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_word_file(&dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn test_load_empty_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "# nothing here\n\n").unwrap();
        assert!(load_word_file(&path).is_err());
    }
}
