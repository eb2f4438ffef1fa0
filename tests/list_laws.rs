//! Property-based tests for the list contract.
//!
//! Random operation sequences are applied to each backing and to a `Vec`
//! model; after every step the list must agree with the model.

use proptest::prelude::*;
use seqlist::prelude::*;

// =============================================================================
// Operation model
// =============================================================================

#[derive(Debug, Clone)]
enum Operation {
    Insert(usize, i32),
    RemoveAt(usize),
    SwapRemove(usize),
    Set(usize, i32),
    AddElements(usize, Vec<i32>),
    RemoveRange(usize, usize),
    Extract(usize, usize),
    Resize(usize, i32),
    Push(i32),
    Pop,
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (0..40_usize, any::<i32>()).prop_map(|(index, element)| Operation::Insert(index, element)),
        (0..40_usize).prop_map(Operation::RemoveAt),
        (0..40_usize).prop_map(Operation::SwapRemove),
        (0..40_usize, any::<i32>()).prop_map(|(index, element)| Operation::Set(index, element)),
        (0..40_usize, prop::collection::vec(any::<i32>(), 0..8))
            .prop_map(|(index, elements)| Operation::AddElements(index, elements)),
        (0..40_usize, 0..40_usize).prop_map(|(from, to)| Operation::RemoveRange(from, to)),
        (0..40_usize, 0..40_usize).prop_map(|(from, to)| Operation::Extract(from, to)),
        (0..40_usize, any::<i32>()).prop_map(|(length, fill)| Operation::Resize(length, fill)),
        any::<i32>().prop_map(Operation::Push),
        Just(Operation::Pop),
    ]
}

fn initial_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..30)
}

/// Applies `operation` to the model, returning what the list should return.
fn apply_to_model(model: &mut Vec<i32>, operation: &Operation) -> Result<Vec<i32>, ListError> {
    let length = model.len();
    let index_error = |index| ListError::IndexOutOfBounds { index, length };
    let range_error = |from, to| ListError::InvalidRange { from, to, length };
    match operation {
        Operation::Insert(index, element) => {
            if *index > length {
                return Err(index_error(*index));
            }
            model.insert(*index, *element);
            Ok(Vec::new())
        }
        Operation::RemoveAt(index) => {
            if *index >= length {
                return Err(index_error(*index));
            }
            Ok(vec![model.remove(*index)])
        }
        Operation::SwapRemove(index) => {
            if *index >= length {
                return Err(index_error(*index));
            }
            Ok(vec![model.swap_remove(*index)])
        }
        Operation::Set(index, element) => {
            if *index >= length {
                return Err(index_error(*index));
            }
            Ok(vec![std::mem::replace(&mut model[*index], *element)])
        }
        Operation::AddElements(index, elements) => {
            if *index > length {
                return Err(index_error(*index));
            }
            model.splice(*index..*index, elements.iter().copied()).for_each(drop);
            Ok(Vec::new())
        }
        Operation::RemoveRange(from, to) => {
            if from > to || *to > length {
                return Err(range_error(*from, *to));
            }
            model.drain(*from..*to);
            Ok(Vec::new())
        }
        Operation::Extract(from, to) => {
            if from > to || *to > length {
                return Err(range_error(*from, *to));
            }
            Ok(model.drain(*from..*to).collect())
        }
        Operation::Resize(new_len, fill) => {
            model.resize(*new_len, *fill);
            Ok(Vec::new())
        }
        Operation::Push(element) => {
            model.push(*element);
            Ok(Vec::new())
        }
        Operation::Pop => Ok(model.pop().into_iter().collect()),
    }
}

/// Applies `operation` to any stack-capable list.
fn apply_to_list<L>(list: &mut L, operation: &Operation) -> Result<Vec<i32>, ListError>
where
    L: Stack<Element = i32>,
{
    match operation {
        Operation::Insert(index, element) => list.insert(*index, *element).map(|()| Vec::new()),
        Operation::RemoveAt(index) => list.remove_at(*index).map(|element| vec![element]),
        Operation::SwapRemove(index) => list.swap_remove(*index).map(|element| vec![element]),
        Operation::Set(index, element) => list.set(*index, *element).map(|element| vec![element]),
        Operation::AddElements(index, elements) => {
            list.add_elements(*index, elements).map(|()| Vec::new())
        }
        Operation::RemoveRange(from, to) => list.remove_range(*from, *to).map(|()| Vec::new()),
        Operation::Extract(from, to) => list.extract_elements(*from, *to),
        Operation::Resize(new_len, fill) => list.resize(*new_len, *fill).map(|()| Vec::new()),
        Operation::Push(element) => {
            list.push(*element);
            Ok(Vec::new())
        }
        Operation::Pop => Ok(list.pop().into_iter().collect()),
    }
}

fn contents<L: List<Element = i32>>(list: &L) -> Vec<i32> {
    list.split_iter().copied().collect()
}

proptest! {
    // =========================================================================
    // Model agreement
    // =========================================================================

    #[test]
    fn prop_array_list_matches_model(
        initial in initial_strategy(),
        operations in prop::collection::vec(operation_strategy(), 0..40),
    ) {
        let mut model = initial.clone();
        let mut list = ArrayList::from_vec(initial);
        for operation in &operations {
            let expected = apply_to_model(&mut model, operation);
            prop_assert_eq!(apply_to_list(&mut list, operation), expected);
            prop_assert_eq!(list.as_slice(), model.as_slice());
            prop_assert!(list.capacity() >= list.len());
        }
    }

    #[test]
    fn prop_linked_list_matches_model(
        initial in initial_strategy(),
        operations in prop::collection::vec(operation_strategy(), 0..40),
    ) {
        let mut model = initial.clone();
        let mut list: LinkedList<i32> = initial.into_iter().collect();
        for operation in &operations {
            let expected = apply_to_model(&mut model, operation);
            prop_assert_eq!(apply_to_list(&mut list, operation), expected);
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), model.clone());
            prop_assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), model.iter().rev().copied().collect::<Vec<_>>());
            prop_assert_eq!(list.first(), model.first());
            prop_assert_eq!(Deque::last(&list), model.last());
        }
    }

    // =========================================================================
    // Cross-backing laws
    // =========================================================================

    #[test]
    fn prop_equal_contents_hash_equally(elements in initial_strategy()) {
        let array = ArrayList::from_vec(elements.clone());
        let linked: LinkedList<i32> = elements.iter().copied().collect();
        let immutable = ImmutableList::from_vec(elements);
        prop_assert_eq!(array.hash_code(), linked.hash_code());
        prop_assert_eq!(linked.hash_code(), immutable.hash_code());
        prop_assert!(array.content_eq(&linked));
        prop_assert!(linked.content_eq(&immutable));
    }

    #[test]
    fn prop_index_of_agrees_with_position(elements in prop::collection::vec(0..5_i32, 0..30), probe in 0..5_i32) {
        let linked: LinkedList<i32> = elements.iter().copied().collect();
        prop_assert_eq!(linked.index_of(&probe), elements.iter().position(|element| *element == probe));
        prop_assert_eq!(linked.last_index_of(&probe), elements.iter().rposition(|element| *element == probe));
    }

    // =========================================================================
    // Views
    // =========================================================================

    #[test]
    fn prop_view_edits_land_in_parent_window(
        initial in prop::collection::vec(any::<i32>(), 10..30),
        operations in prop::collection::vec(operation_strategy(), 0..20),
    ) {
        let from = 3;
        let to = initial.len() - 3;
        let mut window = initial[from..to].to_vec();
        let mut list = ArrayList::from_vec(initial.clone());
        {
            let mut view = list.subview(from, to).unwrap();
            for operation in operations.iter().filter(|operation| !matches!(operation, Operation::Push(_) | Operation::Pop)) {
                let expected = apply_to_model(&mut window, operation);
                prop_assert_eq!(apply_to_view(&mut view, operation), expected);
                prop_assert_eq!(contents(&view), window.clone());
            }
        }
        let mut expected = initial[..from].to_vec();
        expected.extend_from_slice(&window);
        expected.extend_from_slice(&initial[to..]);
        prop_assert_eq!(list.as_slice(), expected.as_slice());
    }

    // =========================================================================
    // Split iterators
    // =========================================================================

    #[test]
    fn prop_split_prefix_then_rest_is_identity(elements in prop::collection::vec(any::<i32>(), 0..3000)) {
        let linked: LinkedList<i32> = elements.iter().copied().collect();
        let array = ArrayList::from_vec(elements.clone());
        let mut split = linked.split_iter();
        let mut collected: Vec<i32> = split.try_split().into_iter().flatten().copied().collect();
        collected.extend(split.copied());
        prop_assert_eq!(&collected, &elements);

        let mut split = array.split_iter();
        let mut collected: Vec<i32> = split.try_split().into_iter().flatten().copied().collect();
        collected.extend(split.copied());
        prop_assert_eq!(&collected, &elements);
    }
}

/// Applies a non-stack operation through the plain `List` contract.
fn apply_to_view<L>(list: &mut L, operation: &Operation) -> Result<Vec<i32>, ListError>
where
    L: List<Element = i32>,
{
    match operation {
        Operation::Insert(index, element) => list.insert(*index, *element).map(|()| Vec::new()),
        Operation::RemoveAt(index) => list.remove_at(*index).map(|element| vec![element]),
        Operation::SwapRemove(index) => list.swap_remove(*index).map(|element| vec![element]),
        Operation::Set(index, element) => list.set(*index, *element).map(|element| vec![element]),
        Operation::AddElements(index, elements) => {
            list.add_elements(*index, elements).map(|()| Vec::new())
        }
        Operation::RemoveRange(from, to) => list.remove_range(*from, *to).map(|()| Vec::new()),
        Operation::Extract(from, to) => list.extract_elements(*from, *to),
        Operation::Resize(new_len, fill) => list.resize(*new_len, *fill).map(|()| Vec::new()),
        Operation::Push(_) | Operation::Pop => unreachable!("stack operations are filtered out"),
    }
}
