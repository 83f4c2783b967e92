use std::rc::Rc;

/// Number of records in the demo data set.
pub const RECORD_COUNT: usize = 1_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub id: u32,
    pub title: String,
}

impl Record {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            title: format!("Item {id}"),
        }
    }
}

/// Records with ids `0..count`, in id order.
pub fn generate_records(count: usize) -> Vec<Record> {
    (0u32..).take(count).map(Record::new).collect()
}

pub fn records() -> Rc<[Record]> {
    generate_records(RECORD_COUNT).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_ordered() {
        let records = records();
        assert_eq!(records.len(), RECORD_COUNT);
        let ids: HashSet<_> = records.iter().map(|record| record.id).collect();
        assert_eq!(ids.len(), RECORD_COUNT);
        assert!(records.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[test]
    fn title_follows_id() {
        for record in records().iter() {
            assert_eq!(record.title, format!("Item {}", record.id));
        }
        assert_eq!(Record::new(999).title, "Item 999");
    }
}
