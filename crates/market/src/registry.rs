use std::collections::HashMap;

use gsmt_core::market::entity::SymbolInfo;

/// # Summary
/// 标的注册表，进程启动时构建一次的静态目录，之后只读共享。
///
/// # Invariants
/// - `symbol` 在表内唯一（重复以先插入者为准）。
/// - `all()` 与 `search()` 均保持插入顺序。
pub struct SymbolRegistry {
    // 按插入顺序保存的标的
    symbols: Vec<SymbolInfo>,
    // symbol → 下标索引
    index: HashMap<String, usize>,
}

impl SymbolRegistry {
    /// 从给定标的列表构建注册表
    pub fn with_symbols(symbols: Vec<SymbolInfo>) -> Self {
        let mut index = HashMap::with_capacity(symbols.len());
        for (i, info) in symbols.iter().enumerate() {
            index.entry(info.symbol.clone()).or_insert(i);
        }
        Self { symbols, index }
    }

    /// 按代码精确查找
    pub fn lookup(&self, symbol: &str) -> Option<&SymbolInfo> {
        self.index.get(symbol).map(|&i| &self.symbols[i])
    }

    /// 判断代码是否已注册
    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// 全部标的，按插入顺序
    pub fn all(&self) -> &[SymbolInfo] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// # Summary
    /// 大小写不敏感的子串搜索。
    ///
    /// # Logic
    /// 1. 将关键字转为小写。
    /// 2. 对代码、名称、市场、类别任一字段命中即入选。
    /// 3. 结果按插入顺序截断到 `limit`。
    pub fn search(&self, query: &str, limit: usize) -> Vec<&SymbolInfo> {
        let needle = query.to_lowercase();
        self.symbols
            .iter()
            .filter(|info| matches_query(info, &needle))
            .take(limit)
            .collect()
    }

    /// 搜索命中的总数，不受 limit 影响
    pub fn match_count(&self, query: &str) -> usize {
        let needle = query.to_lowercase();
        self.symbols.iter().filter(|info| matches_query(info, &needle)).count()
    }
}

fn matches_query(info: &SymbolInfo, needle: &str) -> bool {
    info.symbol.to_lowercase().contains(needle)
        || info.name.to_lowercase().contains(needle)
        || info.market.to_lowercase().contains(needle)
        || info.category.to_lowercase().contains(needle)
}

impl Default for SymbolRegistry {
    /// 内置的全球标的目录：美国指数与个股、澳洲市场、亚欧核心指数
    fn default() -> Self {
        Self::with_symbols(vec![
            // 美国指数
            SymbolInfo::new("^GSPC", "S&P 500", "US", "Index"),
            SymbolInfo::new("^IXIC", "NASDAQ Composite", "US", "Index"),
            SymbolInfo::new("^DJI", "Dow Jones Industrial Average", "US", "Index"),
            // 美国科技股
            SymbolInfo::new("AAPL", "Apple Inc.", "US", "Technology"),
            SymbolInfo::new("GOOGL", "Alphabet Inc.", "US", "Technology"),
            SymbolInfo::new("MSFT", "Microsoft Corporation", "US", "Technology"),
            SymbolInfo::new("AMZN", "Amazon.com Inc.", "US", "Technology"),
            SymbolInfo::new("TSLA", "Tesla Inc.", "US", "Automotive"),
            SymbolInfo::new("META", "Meta Platforms Inc.", "US", "Technology"),
            SymbolInfo::new("NVDA", "NVIDIA Corporation", "US", "Technology"),
            // 美国金融
            SymbolInfo::new("JPM", "JPMorgan Chase & Co.", "US", "Finance"),
            SymbolInfo::new("V", "Visa Inc.", "US", "Finance"),
            // 澳大利亚市场
            SymbolInfo::new("^AXJO", "ASX 200", "Australia", "Index").with_currency("AUD"),
            SymbolInfo::new("CBA.AX", "Commonwealth Bank of Australia", "Australia", "Finance")
                .with_currency("AUD"),
            SymbolInfo::new("BHP.AX", "BHP Group Limited", "Australia", "Mining").with_currency("AUD"),
            SymbolInfo::new("CSL.AX", "CSL Limited", "Australia", "Healthcare").with_currency("AUD"),
            // 亚洲指数
            SymbolInfo::new("^N225", "Nikkei 225", "Japan", "Index").with_currency("JPY"),
            SymbolInfo::new("^HSI", "Hang Seng Index", "Hong Kong", "Index").with_currency("HKD"),
            // 欧洲指数
            SymbolInfo::new("^FTSE", "FTSE 100", "UK", "Index").with_currency("GBP"),
            SymbolInfo::new("^GDAXI", "DAX Performance Index", "Germany", "Index").with_currency("EUR"),
            SymbolInfo::new("^FCHI", "CAC 40", "France", "Index").with_currency("EUR"),
        ])
    }
}
