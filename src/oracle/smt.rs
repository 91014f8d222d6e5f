//! z3 backend for the [`Oracle`] trait
//!
//! Every unknown becomes a `Real` constant and every constraint is
//! asserted as-is, so the solver sees the nonlinear `t_i * v_a` products
//! directly. Each check gets its own context and solver.

use std::collections::BTreeMap;

use log::{debug, warn};
use num::{BigInt, BigRational, Signed};
use z3::ast::{Ast, Bool, Int, Real};
use z3::{Config, Context, Params, SatResult, Solver};

use crate::ir::{Constraint, Unknown};
use crate::oracle::{ConstraintSystem, Model, Oracle, OracleConfig, Verdict};

/// Oracle backed by the z3 SMT solver
#[derive(Debug, Clone, Default)]
pub struct Z3Oracle {
    config: OracleConfig,
}

impl Z3Oracle {
    pub fn new(config: OracleConfig) -> Self {
        Self { config }
    }
}

/// Create a z3 solver with the given configuration
pub fn create_solver_with_config<'ctx>(ctx: &'ctx Context, cfg: &OracleConfig) -> Solver<'ctx> {
    let solver = Solver::new(ctx);
    if let Some(timeout) = cfg.timeout {
        let mut params = Params::new(ctx);
        params.set_u32(
            "timeout",
            u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX),
        );
        solver.set_params(&params);
    }
    solver
}

/// One `Real` constant per unknown, named after the unknown
struct Symbols<'ctx> {
    ctx: &'ctx Context,
    consts: BTreeMap<Unknown, Real<'ctx>>,
}

impl<'ctx> Symbols<'ctx> {
    fn new(ctx: &'ctx Context) -> Self {
        Self {
            ctx,
            consts: BTreeMap::new(),
        }
    }

    fn get(&mut self, unknown: Unknown) -> Real<'ctx> {
        let ctx = self.ctx;
        self.consts
            .entry(unknown)
            .or_insert_with(|| Real::new_const(ctx, unknown.to_string()))
            .clone()
    }
}

/// Exact real literal for an integer of any size
fn literal<'ctx>(ctx: &'ctx Context, value: &BigInt) -> Result<Real<'ctx>, String> {
    let magnitude = Int::from_str(ctx, &value.magnitude().to_string())
        .ok_or_else(|| format!("z3 rejected literal {}", value))?;
    let magnitude = Real::from_int(&magnitude);
    if value.is_negative() {
        Ok(magnitude.unary_minus())
    } else {
        Ok(magnitude)
    }
}

fn encode<'ctx>(
    ctx: &'ctx Context,
    symbols: &mut Symbols<'ctx>,
    constraint: &Constraint,
) -> Result<Bool<'ctx>, String> {
    match constraint {
        Constraint::Meets {
            observation,
            axis,
            position,
            velocity,
        } => {
            let t = symbols.get(Unknown::Time(*observation));
            let p = symbols.get(Unknown::Position(*axis));
            let v = symbols.get(Unknown::Velocity(*axis));
            let stone_p = literal(ctx, position)?;
            let stone_v = literal(ctx, velocity)?;

            let stone = Real::add(ctx, &[&stone_p, &Real::mul(ctx, &[&t, &stone_v])]);
            let line = Real::add(ctx, &[&p, &Real::mul(ctx, &[&v, &t])]);
            Ok(stone._eq(&line))
        }
        Constraint::NonNegative(unknown) => {
            let value = symbols.get(*unknown);
            Ok(value.ge(&Real::from_real(ctx, 0, 1)))
        }
    }
}

/// Read the exact value of `constant` from a z3 model
fn read_value<'ctx>(
    model: &z3::Model<'ctx>,
    unknown: Unknown,
    constant: &Real<'ctx>,
) -> Result<BigRational, String> {
    let value = model
        .eval(constant, true)
        .ok_or_else(|| format!("z3 model has no value for {}", unknown))?;
    let (numer, denom) = value
        .as_real()
        .ok_or_else(|| format!("value of {} does not fit a 64-bit fraction", unknown))?;
    Ok(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
}

impl Oracle for Z3Oracle {
    fn name(&self) -> &'static str {
        "z3"
    }

    fn check(&self, system: &ConstraintSystem) -> Verdict {
        let cfg = Config::new();
        let ctx = Context::new(&cfg);
        let solver = create_solver_with_config(&ctx, &self.config);

        let mut symbols = Symbols::new(&ctx);
        for unknown in system.unknowns() {
            symbols.get(*unknown);
        }
        for constraint in system.constraints() {
            match encode(&ctx, &mut symbols, constraint) {
                Ok(assertion) => solver.assert(&assertion),
                Err(reason) => return Verdict::Unknown(reason),
            }
        }
        debug!("z3 input:\n{}", system);

        match solver.check() {
            SatResult::Unsat => Verdict::Unsat,
            SatResult::Unknown => {
                let reason = solver
                    .get_reason_unknown()
                    .unwrap_or_else(|| "no reason given".to_string());
                warn!("z3 returned unknown: {}", reason);
                match self.config.timeout {
                    Some(timeout) if reason.contains("timeout") || reason.contains("canceled") => {
                        Verdict::Unknown(format!("timeout after {:?}", timeout))
                    }
                    _ => Verdict::Unknown(format!("z3 returned unknown: {}", reason)),
                }
            }
            SatResult::Sat => {
                let Some(z3_model) = solver.get_model() else {
                    return Verdict::Unknown("z3 reported sat without a model".to_string());
                };
                let mut model = Model::new();
                for (unknown, constant) in &symbols.consts {
                    match read_value(&z3_model, *unknown, constant) {
                        Ok(value) => model.assign(*unknown, value),
                        Err(reason) => return Verdict::Unknown(reason),
                    }
                }
                debug!("z3 model with {} values:\n{}", model.len(), model);
                Verdict::Sat(model)
            }
        }
    }
}
