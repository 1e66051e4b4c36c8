use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// The category select always lists its options ascending by id, whatever
/// order the API answered in.
pub fn sort_by_id(categories: &mut [Category]) {
    categories.sort_by_key(|category| category.id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn sorts_ascending_by_id() {
        let mut categories = vec![
            category(3, "Esportivo"),
            category(1, "Sedan"),
            category(2, "SUV"),
        ];

        sort_by_id(&mut categories);

        let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
