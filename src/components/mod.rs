//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are stateless views over caller-supplied props; selection and
//! any other interaction state lives with the hosting page.

pub mod tag_list;
pub mod template_card;
