//! 列表能力：关键字过滤、分页切片、页码生成。
//!
//! 所有列表页共用同一套规则：
//! - 关键字对记录的若干文本字段做不区分大小写的子串匹配，`id` 总在其中；
//! - 分页按 `(page - 1) * size .. page * size` 切片；
//! - 过滤结果变少时页码收敛到最后一个有效页，不会返回越界的空页。

mod fields;

pub use fields::Searchable;

/// 列表查询条件。
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub q: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

impl ListQuery {
    pub fn new(q: Option<String>, page: usize, page_size: usize) -> Self {
        Self { q, page, page_size }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            q: None,
            page: 1,
            page_size: 10,
        }
    }
}

/// 一页结果。
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 收敛后的实际页码
    pub page: usize,
    pub page_size: usize,
    /// 过滤后的总条数
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// 转换页内元素，保留分页信息。
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

/// 记录是否命中关键字（`needle` 需已转小写）。
pub fn matches<T: Searchable>(record: &T, needle: &str) -> bool {
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// 按关键字过滤；空白关键字保留全部记录，顺序不变。
pub fn filter_records<T: Searchable>(records: Vec<T>, query: Option<&str>) -> Vec<T> {
    let needle = match query.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_lowercase(),
        _ => return records,
    };
    records
        .into_iter()
        .filter(|record| matches(record, &needle))
        .collect()
}

/// 总页数：`ceil(len / size)`，空集合为 0。
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// 将请求页码收敛到 `1..=max(total_pages, 1)`。
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// 切出指定页。
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let total_pages = total_pages(total, page_size);
    let page = clamp_page(page, total_pages);
    let start = (page - 1) * page_size;
    let items = items.into_iter().skip(start).take(page_size).collect();
    Page {
        items,
        page,
        page_size,
        total,
        total_pages,
    }
}

/// 分页控件页码：包含 `current` 的至多 `window` 个连续页码，靠边时整体平移。
pub fn page_numbers(current: usize, total_pages: usize, window: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    let window = window.clamp(1, total_pages);
    let current = clamp_page(current, total_pages);
    let half = window / 2;
    let max_start = total_pages - window + 1;
    let start = current.saturating_sub(half).clamp(1, max_start);
    (start..start + window).collect()
}

/// 过滤 + 分页。
pub fn list_page<T: Searchable>(records: Vec<T>, query: &ListQuery) -> Page<T> {
    let filtered = filter_records(records, query.q.as_deref());
    paginate(filtered, query.page, query.page_size)
}
