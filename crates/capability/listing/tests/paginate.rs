use campus_listing::{
    ListQuery, Searchable, clamp_page, filter_records, list_page, page_numbers, paginate,
    total_pages,
};

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: String,
    name: String,
}

impl Searchable for Row {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str()]
    }
}

fn rows(count: usize) -> Vec<Row> {
    (1..=count)
        .map(|index| Row {
            id: format!("ST{index:03}"),
            name: format!("Student {index}"),
        })
        .collect()
}

#[test]
fn pages_concatenate_to_input() {
    for len in 0..=23 {
        for size in 1..=7 {
            let items = rows(len);
            let pages = total_pages(len, size);
            assert_eq!(pages, len.div_ceil(size));
            let mut joined = Vec::new();
            for page in 1..=pages {
                let slice = paginate(items.clone(), page, size);
                assert_eq!(slice.page, page);
                assert!(!slice.items.is_empty());
                assert!(slice.items.len() <= size);
                joined.extend(slice.items);
            }
            assert_eq!(joined, items, "len={len} size={size}");
        }
    }
}

#[test]
fn last_page_holds_remainder() {
    let page = paginate(rows(23), 3, 10);
    assert_eq!(page.total, 23);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.items[0].id, "ST021");
}

#[test]
fn out_of_range_page_clamps_to_last() {
    let page = paginate(rows(12), 9, 5);
    assert_eq!(page.page, 3);
    assert_eq!(page.items.len(), 2);

    let page = paginate(rows(12), 0, 5);
    assert_eq!(page.page, 1);
    assert_eq!(page.items[0].id, "ST001");
}

#[test]
fn empty_collection_yields_single_empty_page() {
    let page = paginate(Vec::<Row>::new(), 4, 10);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());
    assert_eq!(clamp_page(4, 0), 1);
}

#[test]
fn zero_page_size_is_treated_as_one() {
    let page = paginate(rows(3), 2, 0);
    assert_eq!(page.page_size, 1);
    assert_eq!(page.items, vec![rows(3)[1].clone()]);
}

#[test]
fn filter_is_case_insensitive_and_keeps_order() {
    let filtered = filter_records(rows(12), Some("student 1"));
    let ids: Vec<&str> = filtered.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, vec!["ST001", "ST010", "ST011", "ST012"]);
}

#[test]
fn filter_by_exact_id_includes_record() {
    for row in rows(15) {
        let lower = row.id.to_lowercase();
        let filtered = filter_records(rows(15), Some(&lower));
        assert!(filtered.contains(&row));
    }
}

#[test]
fn blank_query_keeps_everything() {
    assert_eq!(filter_records(rows(4), Some("   ")).len(), 4);
    assert_eq!(filter_records(rows(4), None).len(), 4);
}

#[test]
fn shrinking_filter_clamps_current_page() {
    // 停留在第 3 页时输入关键字，结果只剩 1 页
    let query = ListQuery::new(Some("ST00".to_string()), 3, 5);
    let page = list_page(rows(30), &query);
    assert_eq!(page.total, 9);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.items.len(), 4);
}

#[test]
fn page_numbers_window_shifts_at_edges() {
    assert_eq!(page_numbers(1, 10, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_numbers(5, 10, 5), vec![3, 4, 5, 6, 7]);
    assert_eq!(page_numbers(10, 10, 5), vec![6, 7, 8, 9, 10]);
    assert_eq!(page_numbers(2, 3, 5), vec![1, 2, 3]);
    assert_eq!(page_numbers(1, 0, 5), Vec::<usize>::new());
    assert_eq!(page_numbers(42, 4, 2), vec![3, 4]);
}
