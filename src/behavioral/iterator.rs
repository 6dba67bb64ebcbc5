// Pattern 3: Behavioral Patterns - Iterator
// A container hands out a separate cursor that walks its items.

use crate::config::DemoConfig;
use crate::error::PatternError;

#[derive(Debug, Clone, Default)]
pub struct CustomList<T> {
    items: Vec<T>,
}

impl<T> CustomList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iterator(&self) -> ListIterator<'_, T> {
        ListIterator {
            items: &self.items,
            index: 0,
        }
    }
}

/// Cursor over a borrowed `CustomList`.
pub struct ListIterator<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> ListIterator<'a, T> {
    pub fn has_next(&self) -> bool {
        self.index < self.items.len()
    }
}

impl<'a, T> Iterator for ListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len() - self.index;
        (left, Some(left))
    }
}

impl<'a, T> IntoIterator for &'a CustomList<T> {
    type Item = &'a T;
    type IntoIter = ListIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iterator()
    }
}

pub fn demo(_config: &DemoConfig) -> Result<(), PatternError> {
    let mut list = CustomList::new();
    list.add("item1");
    list.add("item2");
    list.add("item3");

    let mut cursor = list.iterator();
    while cursor.has_next() {
        if let Some(item) = cursor.next() {
            println!("{item}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CustomList<String> {
        let mut list = CustomList::new();
        list.add("item1".to_string());
        list.add("item2".to_string());
        list.add("item3".to_string());
        list
    }

    #[test]
    fn test_yields_in_insertion_order_once() {
        let list = sample();
        let mut cursor = list.iterator();

        let mut seen = Vec::new();
        while cursor.has_next() {
            seen.push(cursor.next().unwrap().clone());
        }

        assert_eq!(seen, vec!["item1", "item2", "item3"]);
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_for_loop_over_list() {
        let list = sample();
        let joined: Vec<&str> = (&list).into_iter().map(String::as_str).collect();
        assert_eq!(joined, vec!["item1", "item2", "item3"]);
    }

    #[test]
    fn test_independent_cursors() {
        let list = sample();
        let mut first = list.iterator();
        first.next();

        let second = list.iterator();
        assert_eq!(second.count(), 3);
        assert_eq!(first.size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_empty_list() {
        let list: CustomList<u8> = CustomList::new();
        assert!(list.is_empty());
        assert!(!list.iterator().has_next());
    }
}
