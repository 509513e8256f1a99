use compare::Compare;
use quickcheck::{Arbitrary, Gen};
use crate::AvlTree;

impl<T, C> Arbitrary for AvlTree<T, C>
    where T: Arbitrary, C: 'static + Clone + Compare<T> + Default {

    fn arbitrary(gen: &mut Gen) -> Self { Vec::<T>::arbitrary(gen).into_iter().collect() }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let vec: Vec<T> = self.to_pre_order();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}
