//! 表达式规范化模块 - 能力层
//!
//! 负责用户书写习惯与远程服务语法之间的双向文本转换：
//! - `normalize`: 用户语法 → 服务语法（`^` 变 `**`，补全隐式乘号）
//! - `denormalize`: 服务语法 → 展示语法（反向替换）
//!
//! 两个函数都是纯文本替换：逐条规则对整个字符串做一次替换，
//! 不做分词、不校验括号配平、不保证退化输入下的幂等性。
//! 数学上是否合法由远程服务判定，这里永远不报错。

use regex::Regex;
use std::sync::LazyLock;

static DIGIT_LETTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d)([a-zA-Z])").unwrap());
static LETTER_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-zA-Z])(\d)").unwrap());
static DIGIT_OPEN_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d)\(").unwrap());
static CLOSE_PAREN_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\)(\d)").unwrap());

static DIGIT_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d)\*").unwrap());
static STAR_OPEN_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\(").unwrap());
static CLOSE_PAREN_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\)\*").unwrap());

/// 将用户输入的表达式规范化为服务端接受的语法
///
/// # 参数
/// - `text`: 用户原始输入
///
/// # 返回
/// 返回服务端语法的表达式（显式乘号、`**` 幂运算符）
pub fn normalize(text: &str) -> String {
    let transformed = text.replace('^', "**");
    let transformed = DIGIT_LETTER.replace_all(&transformed, "${1}*${2}");
    let transformed = LETTER_DIGIT.replace_all(&transformed, "${1}*${2}");
    let transformed = DIGIT_OPEN_PAREN.replace_all(&transformed, "${1}*(");
    let transformed = CLOSE_PAREN_DIGIT.replace_all(&transformed, ")*${1}");
    transformed.into_owned()
}

/// 将服务端语法的表达式还原为用户友好的展示语法
///
/// 只是尽力而为的外观还原，不是经过验证的逆变换：
/// 字母后紧跟数字产生的乘号（`x*2`）不会被去掉。
///
/// # 参数
/// - `text`: 服务端返回的表达式
///
/// # 返回
/// 返回展示语法的表达式（`^` 幂运算符、隐式乘号）
pub fn denormalize(text: &str) -> String {
    let reverted = text.replace("**", "^");
    let reverted = DIGIT_STAR.replace_all(&reverted, "${1}");
    let reverted = STAR_OPEN_PAREN.replace_all(&reverted, "(");
    let reverted = CLOSE_PAREN_STAR.replace_all(&reverted, ")");
    reverted.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_power_and_implicit_multiplication() {
        assert_eq!(normalize("2x^2"), "2*x**2");
        assert_eq!(normalize("x^2 + 2x + 1"), "x**2 + 2*x + 1");
    }

    #[test]
    fn test_normalize_letter_digit() {
        assert_eq!(normalize("x2"), "x*2");
    }

    #[test]
    fn test_normalize_parentheses() {
        assert_eq!(normalize("2(x+1)"), "2*(x+1)");
        assert_eq!(normalize("(x+1)2"), "(x+1)*2");
    }

    #[test]
    fn test_normalize_function_call_untouched() {
        // 字母后跟左括号不是数字相邻，五条规则都不命中
        assert_eq!(normalize("ln(x+1)"), "ln(x+1)");
        assert_eq!(normalize("sin(x)"), "sin(x)");
    }

    #[test]
    fn test_normalize_total_over_degenerate_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("^^"), "****");
        assert_eq!(normalize("   "), "   ");
    }

    #[test]
    fn test_normalize_deterministic() {
        let input = "2x^2 + ln(x+1)";
        let first = normalize(input);
        for _ in 0..10 {
            assert_eq!(normalize(input), first);
        }
    }

    #[test]
    fn test_denormalize_examples() {
        assert_eq!(denormalize("2*x**2"), "2x^2");
        assert_eq!(denormalize("3*(x)"), "3(x)");
        assert_eq!(denormalize("(x+1)*2"), "(x+1)2");
    }

    #[test]
    fn test_round_trip_restores_user_notation() {
        // 字母后紧跟数字的相邻（如 "x2"）不在还原保证之内
        let cases = [
            "2x^2",
            "2(x+1)",
            "(x+1)2",
            "x^3 + x^2",
            "x^2 + 2x + 1",
            "sin(x)",
            "cos(x)",
            "1/(x+1)",
            "ln(x)",
        ];
        for case in cases {
            assert_eq!(denormalize(&normalize(case)), case, "回环失败: {}", case);
        }
    }

    #[test]
    fn test_denormalize_keeps_letter_digit_star() {
        // "x*2" 的乘号前面是字母，三条去乘号规则都不命中
        assert_eq!(denormalize("x*2"), "x*2");
    }
}
