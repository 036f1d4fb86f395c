#[cfg(test)]
pub mod common;


#[cfg(test)]
mod test_items;



#[cfg(test)]
mod test_turn_flow;
