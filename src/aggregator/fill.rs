//! Type-directed "fill unset fields" merging.
//!
//! A field counts as unset when it holds its zero value: empty string, empty
//! list, zero priority or `None`. Set fields are never overwritten.

use crate::config::schema::{Router, RouterTls};

/// Fill every unset field of `self` from the matching field of `base`.
pub trait FillUnset {
    fn fill_unset(&mut self, base: &Self);
}

impl FillUnset for Router {
    fn fill_unset(&mut self, base: &Self) {
        // `base` is left alone: a merged router keeps its own reference.
        fill_vec(&mut self.entry_points, &base.entry_points);
        fill_vec(&mut self.middlewares, &base.middlewares);
        fill_string(&mut self.service, &base.service);
        fill_string(&mut self.rule, &base.rule);
        if self.priority == 0 {
            self.priority = base.priority;
        }
        fill_option(&mut self.tls, &base.tls);
    }
}

impl FillUnset for RouterTls {
    fn fill_unset(&mut self, base: &Self) {
        fill_string(&mut self.options, &base.options);
        fill_string(&mut self.cert_resolver, &base.cert_resolver);
        fill_vec(&mut self.domains, &base.domains);
    }
}

fn fill_string(dst: &mut String, src: &str) {
    if dst.is_empty() {
        src.clone_into(dst);
    }
}

fn fill_vec<T: Clone>(dst: &mut Vec<T>, src: &[T]) {
    if dst.is_empty() {
        dst.extend_from_slice(src);
    }
}

fn fill_option<T: Clone + FillUnset>(dst: &mut Option<T>, src: &Option<T>) {
    if let Some(base) = src {
        match dst {
            Some(value) => value.fill_unset(base),
            None => *dst = Some(base.clone()),
        }
    }
}
