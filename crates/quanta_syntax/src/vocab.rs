//! Vocabulary - 词法词汇表
//!
//! 关键字、运算符、预定义函数和已知单位不再是全局常量，
//! 而是在构造 Lexer 时显式传入，方便替换成其他单位体系。

use crate::token::{Keyword, Operator};
use std::collections::{HashMap, HashSet};

const STANDARD_FUNCTIONS: &[&str] = &[
    "convert_length",
    "convert_mass",
    "convert_time",
    "convert_temperature",
    "normalize_unit",
    "get_conversion_factor",
    "is_compatible",
    "miles_to_km",
    "km_to_miles",
    "meters_to_feet",
    "feet_to_meters",
    "inches_to_cm",
    "cm_to_inches",
    "yards_to_meters",
    "meters_to_yards",
    "pounds_to_kg",
    "kg_to_pounds",
    "ounces_to_grams",
    "grams_to_ounces",
    "celsius_to_fahrenheit",
    "fahrenheit_to_celsius",
    "kelvin_to_celsius",
    "celsius_to_kelvin",
    "seconds_to_minutes",
    "minutes_to_seconds",
    "hours_to_minutes",
    "minutes_to_hours",
    "days_to_hours",
    "hours_to_days",
    "years_to_days",
    "days_to_years",
    "currency_convert",
    "calculate_min",
    "calculate_max",
    "calculate_speed",
    "cal_sum",
    "calc_diff",
    "calc_div",
    "calc_mul",
    "radians_to_degrees",
    "degrees_to_radians",
    "liters_to_gallons",
    "gallons_to_liters",
    "pascal_to_psi",
    "psi_to_pascal",
    "joules_to_calories",
    "calories_to_joules",
    "watts_to_horsepower",
    "horsepower_to_watts",
    "square_meters_to_square_feet",
    "square_feet_to_square_meters",
];

const STANDARD_UNITS: &[&str] = &[
    // 长度
    "m", "cm", "mm", "km", "mile", "miles", "yd", "ft", "inch",
    // 质量
    "g", "mg", "kg", "lb", "pound", "pounds", "oz", "ton",
    // 时间
    "s", "sec", "min", "hour", "hours", "day", "days", "week", "weeks", "year", "years",
    // 温度
    "C", "F", "K", "Celsius", "Fahrenheit", "Kelvin",
    // 速度
    "m/s", "km/h", "mph",
    // 货币
    "usd", "eur", "gbp", "inr", "jpy",
];

/// 词法分析依赖的全部词汇
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    keywords: HashMap<String, Keyword>,
    operators: HashSet<Operator>,
    functions: HashSet<String>,
    units: HashSet<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

impl Vocabulary {
    /// 单位计算器的标准词汇表
    pub fn standard() -> Self {
        let keywords = [
            Keyword::Let,
            Keyword::Convert,
            Keyword::To,
            Keyword::In,
            Keyword::Print,
        ]
        .into_iter()
        .map(|kw| (kw.as_str().to_string(), kw))
        .collect();

        Self {
            keywords,
            operators: all_operators(),
            functions: STANDARD_FUNCTIONS.iter().map(|s| s.to_string()).collect(),
            units: STANDARD_UNITS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// 没有关键字、函数和单位的词汇表；运算符全部启用
    pub fn empty() -> Self {
        Self {
            keywords: HashMap::new(),
            operators: all_operators(),
            functions: HashSet::new(),
            units: HashSet::new(),
        }
    }

    /// 添加关键字拼写 (可以为同一个关键字设置别名)
    pub fn with_keyword(mut self, spelling: impl Into<String>, keyword: Keyword) -> Self {
        self.keywords.insert(spelling.into(), keyword);
        self
    }

    pub fn with_function(mut self, name: impl Into<String>) -> Self {
        self.functions.insert(name.into());
        self
    }

    pub fn with_unit(mut self, name: impl Into<String>) -> Self {
        self.units.insert(name.into());
        self
    }

    /// 禁用某个运算符，源码中出现它时按非法字符处理
    pub fn without_operator(mut self, op: Operator) -> Self {
        self.operators.remove(&op);
        self
    }

    pub fn keyword(&self, word: &str) -> Option<Keyword> {
        self.keywords.get(word).copied()
    }

    pub fn is_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    pub fn is_unit(&self, name: &str) -> bool {
        self.units.contains(name)
    }

    pub fn allows(&self, op: Operator) -> bool {
        self.operators.contains(&op)
    }
}

fn all_operators() -> HashSet<Operator> {
    [
        Operator::Plus,
        Operator::Minus,
        Operator::Star,
        Operator::Slash,
        Operator::Assign,
    ]
    .into_iter()
    .collect()
}
