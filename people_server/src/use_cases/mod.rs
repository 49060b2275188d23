pub mod create_person;
pub mod delete_person;
pub mod find_person;

#[cfg(test)]
pub(crate) mod test_support;
