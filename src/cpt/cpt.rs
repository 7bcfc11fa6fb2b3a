use ::std::collections::HashMap;
use ::std::fmt;

use ::num_bigint::{BigInt, BigUint};
use ::num_rational::BigRational;
use ::num_traits::Zero;

use ::pgw_bigmath::factorial;
use ::pgw_partition::{CycleType, Partitions};

/// The conjugate power table of one degree: for every cycle type, the
/// explicit row of its first order-many powers, resolved back to type
/// indices.
///
/// This is the sequential reference implementation.  It shares the
/// cycle-type algebra with the concurrent engine but nothing else, so
/// agreement between the two on width and density is meaningful
/// cross-validation.  It also answers logarithm queries, which need
/// the full rows the concurrent path never materializes.
pub struct Cpt {
    degree: usize,
    cycle_types: Vec<CycleType>,
    index_by_type: HashMap<CycleType, usize>,
    rows: Vec<Vec<usize>>,
    markup: Option<Vec<Vec<bool>>>,
    width: Option<BigUint>,
}

#[derive(Debug, Fail)]
#[fail(display = "no cycle type {} in the degree-{} table", cycle_type, degree)]
pub struct UnknownTypeError {
    degree: usize,
    cycle_type: String,
    backtrace: ::failure::Backtrace,
}

/// One way of reaching a queried type as a power: `base` to the
/// `power`-th resolves to the query.  Powers start at 1; the zeroth
/// power, which every type takes to the identity, is excluded by
/// convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logarithm {
    pub base: CycleType,
    pub power: usize,
}

impl Cpt {
    pub fn new(degree: usize) -> Cpt {
        Cpt {
            degree,
            cycle_types: vec![],
            index_by_type: HashMap::new(),
            rows: vec![],
            markup: None,
            width: None,
        }
    }

    pub fn degree(&self) -> usize
    { self.degree }

    /// n!, the order of the group.
    pub fn order(&self) -> BigUint
    { factorial(self.degree) }

    /// Build the table: every cycle type of the degree in generation
    /// order, then one row of resolved power indices per type.  A row
    /// whose weighted part sum disagrees with the degree means the
    /// algebra itself is broken, and panics.  Idempotent.
    pub fn generate(&mut self) {
        if !self.cycle_types.is_empty() {
            return;
        }
        for (index, p) in Partitions::new(self.degree).enumerate() {
            let t = p.cycle_type();
            self.index_by_type.insert(t.clone(), index);
            self.cycle_types.push(t);
        }
        debug!("generated {} cycle types; n={}", self.cycle_types.len(), self.degree);

        let mut power = CycleType::zeroed(self.degree);
        for lambda in &self.cycle_types {
            let order = lambda.order();
            let mut row = Vec::with_capacity(order as usize);
            for k in 1..=order as usize {
                lambda.power_into(k, &mut power);
                if power.weight() != self.degree {
                    panic!(
                        "bad row in power table; lambda={} k={} power={} weight={}",
                        lambda, k, power, power.weight(),
                    );
                }
                match self.index_by_type.get(&power) {
                    Some(&target) => row.push(target),
                    None => panic!(
                        "power of a catalogued type is missing from the table; \
                         lambda={} k={} power={}",
                        lambda, k, power,
                    ),
                }
            }
            self.rows.push(row);
        }
        debug!("generated {} power rows; n={}", self.rows.len(), self.degree);
    }

    pub fn num_cycle_types(&mut self) -> usize {
        self.generate();
        self.cycle_types.len()
    }

    pub fn cycle_types(&mut self) -> &[CycleType] {
        self.generate();
        &self.cycle_types
    }

    /// The largest order of any type in the table; the width of the
    /// widest row.
    pub fn diameter(&mut self) -> u64 {
        self.generate();
        self.cycle_types.iter().map(CycleType::order).max().unwrap_or(0)
    }

    /// The width of this degree, summed row by row.  Exact and
    /// memoized; must agree with the concurrent engine.
    pub fn width(&mut self) -> BigUint {
        if let Some(ref width) = self.width {
            return width.clone();
        }
        self.ensure_markup();
        let markup = self.markup.as_ref().expect("markup just built");

        let mut width = BigUint::zero();
        for (index, row) in self.rows.iter().enumerate() {
            // the unmarked columns of an unmarked row are exactly the
            // powers that land back on the row's own type: its height
            let height = match row_height(markup, index) {
                0 => continue,
                h => h,
            };
            let class = self.cycle_types[index].class_size();
            let height = BigUint::from(height as u64);
            assert!(
                (&class % &height).is_zero(),
                "width share for {} is not integral; class={} height={}",
                self.cycle_types[index], class, height,
            );
            width += class / height;
        }
        debug!("done calculating width; n={} width={}", self.degree, width);
        self.width = Some(width.clone());
        width
    }

    /// Width over n!, as an exact rational.
    pub fn density(&mut self) -> BigRational {
        let width = self.width();
        BigRational::new(BigInt::from(width), BigInt::from(self.order()))
    }

    /// The types whose rows survived markup: those reachable as a
    /// nontrivial power of no other type.
    pub fn maximal_types(&mut self) -> Vec<CycleType> {
        self.ensure_markup();
        let markup = self.markup.as_ref().expect("markup just built");
        self.cycle_types.iter().enumerate()
            .filter(|&(index, _)| !row_marked(markup, index))
            .map(|(_, t)| t.clone())
            .collect()
    }

    pub fn num_maximal_types(&mut self) -> usize {
        self.ensure_markup();
        let markup = self.markup.as_ref().expect("markup just built");
        (0..self.rows.len()).filter(|&index| !row_marked(markup, index)).count()
    }

    /// Every way of writing `u` as a positive power of a catalogued
    /// type, its first powers included.  An unknown type (wrong
    /// degree, usually) is a query error, not a table defect.
    pub fn logarithms(&mut self, u: &CycleType) -> Result<Vec<Logarithm>, UnknownTypeError> {
        self.generate();
        let target = match self.index_by_type.get(u) {
            Some(&index) => index,
            None => return Err(UnknownTypeError {
                degree: self.degree,
                cycle_type: u.to_string(),
                backtrace: ::failure::Backtrace::new(),
            }),
        };
        let mut logarithms = vec![];
        for row in &self.rows {
            let base = match row.first() {
                Some(&base) => base,
                None => continue,
            };
            for (column, &entry) in row.iter().enumerate() {
                if entry == target {
                    logarithms.push(Logarithm {
                        base: self.cycle_types[base].clone(),
                        power: column + 1,
                    });
                }
            }
        }
        Ok(logarithms)
    }

    fn ensure_markup(&mut self) {
        self.generate();
        if self.markup.is_some() {
            return;
        }
        let mut markup: Vec<Vec<bool>> = {
            self.rows.iter().map(|row| vec![false; row.len()]).collect()
        };
        for (index, row) in self.rows.iter().enumerate() {
            let base = match row.first() {
                Some(&base) => base,
                None => continue,
            };
            for (column, &entry) in row.iter().enumerate() {
                if column > 0 && entry != base {
                    // a later power of this row escapes to another
                    // type; that type is non-maximal, wholesale
                    markup[index][column] = true;
                    for cell in &mut markup[entry] {
                        *cell = true;
                    }
                }
            }
        }
        self.markup = Some(markup);
    }
}

fn row_marked(markup: &[Vec<bool>], index: usize) -> bool {
    markup[index].first().map_or(false, |&marked| marked)
}

/// The number of own-row columns that still resolve to the row
/// itself; zero when the row as a whole has been marked.
fn row_height(markup: &[Vec<bool>], index: usize) -> usize {
    if row_marked(markup, index) {
        return 0;
    }
    markup[index].iter().filter(|&&marked| !marked).count()
}

/// Renders the type list and the resolved table, slashing marked
/// entries, with indices shifted to 1-based for reading alongside the
/// mathematical notation.
impl fmt::Display for Cpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "types:")?;
        for (index, t) in self.cycle_types.iter().enumerate() {
            writeln!(f, "{}: {}", index + 1, t)?;
        }
        writeln!(f, "table:")?;
        for (index, row) in self.rows.iter().enumerate() {
            for (column, &entry) in row.iter().enumerate() {
                if column > 0 {
                    write!(f, " ")?;
                }
                let marked = self.markup.as_ref()
                    .map_or(false, |markup| markup[index][column]);
                if marked {
                    write!(f, "/")?;
                }
                write!(f, "{}", entry + 1)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
