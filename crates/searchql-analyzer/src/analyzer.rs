//! Expression Analyzer
//!
//! Converts an unresolved expression tree into a resolved, fully typed
//! [`Expression`]. Names are resolved through the [`AnalysisContext`], calls
//! through the [`FunctionRegistry`]. Operators, casts and `IN` lists are
//! lowered to ordinary function calls along the way.
//!
//! Analysis stops at the first failure; no partially resolved tree is
//! returned.

use log::{debug, trace, warn};
use searchql_ast::{
    AggregateExpr, CaseExpr, CastExpr, DataType, FunctionExpr, InExpr, IntervalExpr, Literal,
    QualifiedName, RelevanceFieldList, SpanExpr, UnresolvedExpression, WindowExpr,
};
use searchql_diagnostics::{Result, SQL0002, SQL0102, SQL0105, SQL0106, SQL0111, SQL0400, SqlError};
use searchql_expression::{
    AggregateExpression, CaseExpression, Expression, FunctionCategory, FunctionError,
    FunctionRegistry, NamedArgumentExpression, ReferenceExpression, SpanExpression,
    WhenExpression, WindowExpression, WindowFunction, cast_function_name,
};
use searchql_types::{ExprType, ExprValue, Symbol, TypeCoercer, type_list};

use crate::{AnalysisContext, QualifierAnalyzer};

/// Resolves unresolved expressions against a context and a function registry
#[derive(Debug, Clone)]
pub struct ExpressionAnalyzer<'r> {
    registry: &'r FunctionRegistry,
    coercer: TypeCoercer,
}

impl ExpressionAnalyzer<'static> {
    /// Create an analyzer over the built-in function registry
    pub fn new() -> Self {
        Self::with_registry(FunctionRegistry::builtin())
    }
}

impl Default for ExpressionAnalyzer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> ExpressionAnalyzer<'r> {
    /// Create an analyzer over a custom function registry
    pub fn with_registry(registry: &'r FunctionRegistry) -> Self {
        Self {
            registry,
            coercer: TypeCoercer::new(),
        }
    }

    /// Get the function registry
    pub fn registry(&self) -> &'r FunctionRegistry {
        self.registry
    }

    /// Analyze an expression
    pub fn analyze(
        &self,
        expr: &UnresolvedExpression,
        ctx: &mut AnalysisContext,
    ) -> Result<Expression> {
        self.visit(expr, ctx, 0)
    }

    fn visit(
        &self,
        expr: &UnresolvedExpression,
        ctx: &mut AnalysisContext,
        depth: usize,
    ) -> Result<Expression> {
        let max_depth = ctx.config().max_depth;
        if depth > max_depth {
            return Err(SqlError::semantic(
                SQL0111,
                format!("Expression nesting exceeds the maximum depth of {max_depth}"),
            ));
        }
        trace!("analyzing {} at depth {}", expr.kind(), depth);

        let depth = depth + 1;
        match expr {
            UnresolvedExpression::Literal(lit) => Ok(Expression::Literal(literal_value(lit))),
            UnresolvedExpression::Interval(interval) => self.visit_interval(interval, ctx, depth),
            UnresolvedExpression::AllFields => Ok(Expression::Literal(ExprValue::string("*"))),
            UnresolvedExpression::QualifiedName(name) => self.visit_qualified_name(name, ctx),

            UnresolvedExpression::BinaryOp(bin_op) => {
                let args = vec![
                    self.visit(&bin_op.left, ctx, depth)?,
                    self.visit(&bin_op.right, ctx, depth)?,
                ];
                self.compile(bin_op.op.function_name(), FunctionCategory::Scalar, args)
            }
            UnresolvedExpression::UnaryOp(un_op) => {
                let args = vec![self.visit(&un_op.operand, ctx, depth)?];
                self.compile(un_op.op.function_name(), FunctionCategory::Scalar, args)
            }
            UnresolvedExpression::In(in_expr) => self.visit_in(in_expr, ctx, depth),

            UnresolvedExpression::Function(func) => self.visit_function(func, ctx, depth),
            UnresolvedExpression::Argument(arg) => {
                let value = self.visit(&arg.value, ctx, depth)?;
                Ok(Expression::NamedArgument(NamedArgumentExpression {
                    name: arg.name.clone(),
                    value: Box::new(value),
                }))
            }
            UnresolvedExpression::RelevanceFieldList(fields) => Ok(relevance_fields(fields)),

            UnresolvedExpression::Cast(cast) => self.visit_cast(cast, ctx, depth),
            UnresolvedExpression::Case(case) => self.visit_case(case, ctx, depth),

            UnresolvedExpression::Aggregate(agg) => self
                .resolve_aggregate(agg, ctx, depth)
                .map(Expression::Aggregate),
            UnresolvedExpression::Window(window) => self.visit_window(window, ctx, depth),
            UnresolvedExpression::Span(span) => self.visit_span(span, ctx, depth),
        }
    }

    // === Names ===

    fn visit_qualified_name(
        &self,
        name: &QualifiedName,
        ctx: &AnalysisContext,
    ) -> Result<Expression> {
        let full_name = name.to_string();

        // Parse captures shadow fields of the same name
        if let Some(named) = ctx.named_expression(&full_name) {
            if named.delegate.is_parse() {
                debug!("resolved {} to a parse capture", full_name);
                return Ok((*named.delegate).clone());
            }
        }

        let field_name = QualifierAnalyzer::new(ctx).unqualified_name(name)?;
        let expr_type = ctx.environment().resolve(&Symbol::field(field_name.as_str()))?;

        if matches!(expr_type, ExprType::Array(_)) {
            return Err(SqlError::syntax(
                SQL0002,
                format!("Identifier [{field_name}] of type [{expr_type}] is not supported yet"),
            ));
        }

        Ok(Expression::Reference(ReferenceExpression {
            name: field_name,
            expr_type,
        }))
    }

    // === Calls ===

    fn visit_function(
        &self,
        func: &FunctionExpr,
        ctx: &mut AnalysisContext,
        depth: usize,
    ) -> Result<Expression> {
        let name = ctx.config().normalize_function_name(&func.name);
        let args = self.visit_all(&func.args, ctx, depth)?;

        match self.registry.category_of(&name) {
            Some(FunctionCategory::Relevance) => {
                Ok(self.registry.compile_relevance(&name, args)?)
            }
            Some(FunctionCategory::Aggregate) => {
                self.compile(&name, FunctionCategory::Aggregate, args)
            }
            _ => self.compile(&name, FunctionCategory::Scalar, args),
        }
    }

    fn visit_interval(
        &self,
        interval: &IntervalExpr,
        ctx: &mut AnalysisContext,
        depth: usize,
    ) -> Result<Expression> {
        let value = self.visit(&interval.value, ctx, depth)?;
        let unit = Expression::Literal(ExprValue::string(interval.unit.as_str()));
        self.compile("interval", FunctionCategory::Scalar, vec![value, unit])
    }

    fn visit_cast(
        &self,
        cast: &CastExpr,
        ctx: &mut AnalysisContext,
        depth: usize,
    ) -> Result<Expression> {
        let expression = self.visit(&cast.expression, ctx, depth)?;
        let function = cast_target(&cast.target).inspect_err(|err| {
            warn!("registry has no cast for target {}: {}", cast.target, err);
        })?;
        self.compile(function, FunctionCategory::Scalar, vec![expression])
    }

    /// `x IN (a, b, c)` becomes `x = a OR (x = b OR x = c)`
    fn visit_in(
        &self,
        in_expr: &InExpr,
        ctx: &mut AnalysisContext,
        depth: usize,
    ) -> Result<Expression> {
        if in_expr.values.is_empty() {
            return Err(SqlError::semantic(
                SQL0106,
                "IN list must contain at least one value",
            ));
        }

        let field = self.visit(&in_expr.field, ctx, depth)?;
        let mut comparisons = Vec::with_capacity(in_expr.values.len());
        for value in &in_expr.values {
            let value = self.visit(value, ctx, depth)?;
            comparisons.push(self.compile(
                "=",
                FunctionCategory::Scalar,
                vec![field.clone(), value],
            )?);
        }

        let mut comparisons = comparisons.into_iter().rev();
        let Some(last) = comparisons.next() else {
            return Err(SqlError::semantic(
                SQL0106,
                "IN list must contain at least one value",
            ));
        };
        comparisons.try_fold(last, |acc, comparison| {
            self.compile("or", FunctionCategory::Scalar, vec![comparison, acc])
        })
    }

    // === Conditionals ===

    fn visit_case(
        &self,
        case: &CaseExpr,
        ctx: &mut AnalysisContext,
        depth: usize,
    ) -> Result<Expression> {
        let case_value = case
            .case_value
            .as_deref()
            .map(|value| self.visit(value, ctx, depth))
            .transpose()?;

        let mut whens = Vec::with_capacity(case.whens.len());
        for when in &case.whens {
            let condition = self.visit(&when.condition, ctx, depth)?;
            // The simple form compares each WHEN value against the case value
            let condition = match &case_value {
                Some(value) => self.compile(
                    "=",
                    FunctionCategory::Scalar,
                    vec![value.clone(), condition],
                )?,
                None => condition,
            };
            let condition_type = condition.expr_type();
            if condition_type != ExprType::Boolean {
                return Err(SqlError::semantic(
                    SQL0105,
                    format!("Condition of WHEN clause must be BOOLEAN, but found {condition_type}"),
                ));
            }
            let result = self.visit(&when.result, ctx, depth)?;
            whens.push(WhenExpression { condition, result });
        }

        let default = case
            .else_result
            .as_deref()
            .map(|value| self.visit(value, ctx, depth))
            .transpose()?;

        let result_types: Vec<ExprType> = whens
            .iter()
            .map(|when| when.result.expr_type())
            .chain(default.iter().map(Expression::expr_type))
            .collect();
        let return_type = self.coercer.unify(&result_types).map_err(|_| {
            SqlError::semantic(
                SQL0105,
                format!(
                    "All result types of CASE clause must be the same, but found [{}]",
                    type_list(&result_types)
                ),
            )
        })?;

        Ok(Expression::Case(CaseExpression {
            whens,
            default: default.map(Box::new),
            return_type,
        }))
    }

    // === Aggregation and windows ===

    fn resolve_aggregate(
        &self,
        agg: &AggregateExpr,
        ctx: &mut AnalysisContext,
        depth: usize,
    ) -> Result<AggregateExpression> {
        let name = ctx.config().normalize_function_name(&agg.name);
        if self.registry.category_of(&name) != Some(FunctionCategory::Aggregate) {
            return Err(SqlError::semantic(
                SQL0102,
                format!("Unsupported aggregation function {}", agg.name),
            ));
        }

        let mut args = vec![self.visit(&agg.field, ctx, depth)?];
        args.extend(self.visit_all(&agg.args, ctx, depth)?);

        let Expression::Aggregate(resolved) =
            self.compile(&name, FunctionCategory::Aggregate, args)?
        else {
            return Err(SqlError::configuration(
                SQL0400,
                format!("aggregate function {name} did not build an aggregate"),
            ));
        };

        let mut resolved = resolved.distinct(agg.distinct);
        if let Some(condition) = &agg.condition {
            let condition = self.visit(condition, ctx, depth)?;
            let condition_type = condition.expr_type();
            if condition_type != ExprType::Boolean {
                return Err(SqlError::semantic(
                    SQL0105,
                    format!("Condition of FILTER clause must be BOOLEAN, but found {condition_type}"),
                ));
            }
            resolved = resolved.condition(condition);
        }
        Ok(resolved)
    }

    fn visit_window(
        &self,
        window: &WindowExpr,
        ctx: &mut AnalysisContext,
        depth: usize,
    ) -> Result<Expression> {
        let function = match window.function.as_ref() {
            UnresolvedExpression::Aggregate(agg) => {
                WindowFunction::Aggregate(self.resolve_aggregate(agg, ctx, depth)?)
            }
            UnresolvedExpression::Function(func) => self.resolve_window_call(func, ctx, depth)?,
            other => {
                return Err(FunctionError::NotWindowFunction {
                    name: other.kind().to_string(),
                }
                .into());
            }
        };

        let partition_by = self.visit_all(&window.partition_by, ctx, depth)?;
        let mut sort_by = Vec::with_capacity(window.sort_by.len());
        for item in &window.sort_by {
            sort_by.push((item.direction, self.visit(&item.expression, ctx, depth)?));
        }

        Ok(Expression::Window(WindowExpression {
            function,
            partition_by,
            sort_by,
        }))
    }

    fn resolve_window_call(
        &self,
        func: &FunctionExpr,
        ctx: &mut AnalysisContext,
        depth: usize,
    ) -> Result<WindowFunction> {
        let name = ctx.config().normalize_function_name(&func.name);
        let category = match self.registry.category_of(&name) {
            Some(category @ (FunctionCategory::Window | FunctionCategory::Aggregate)) => category,
            _ => return Err(FunctionError::NotWindowFunction { name }.into()),
        };

        let args = self.visit_all(&func.args, ctx, depth)?;
        match self.compile(&name, category, args)? {
            Expression::Function(call) => Ok(WindowFunction::Ranking(call)),
            Expression::Aggregate(agg) => Ok(WindowFunction::Aggregate(agg)),
            _ => Err(FunctionError::NotWindowFunction { name }.into()),
        }
    }

    fn visit_span(
        &self,
        span: &SpanExpr,
        ctx: &mut AnalysisContext,
        depth: usize,
    ) -> Result<Expression> {
        let field = self.visit(&span.field, ctx, depth)?;
        let value = self.visit(&span.value, ctx, depth)?;
        Ok(Expression::Span(SpanExpression {
            field: Box::new(field),
            value: Box::new(value),
            unit: span.unit,
        }))
    }

    // === Helpers ===

    fn visit_all(
        &self,
        exprs: &[UnresolvedExpression],
        ctx: &mut AnalysisContext,
        depth: usize,
    ) -> Result<Vec<Expression>> {
        exprs
            .iter()
            .map(|expr| self.visit(expr, ctx, depth))
            .collect()
    }

    fn compile(
        &self,
        name: &str,
        category: FunctionCategory,
        args: Vec<Expression>,
    ) -> Result<Expression> {
        Ok(self.registry.compile(name, category, args)?)
    }
}

/// Name of the cast function for a written target type
fn cast_target(target: &str) -> std::result::Result<&'static str, FunctionError> {
    let unsupported = |target: String| FunctionError::UnsupportedCastTarget { target };

    let data_type: DataType = target
        .parse()
        .map_err(|_| unsupported(target.to_ascii_uppercase()))?;
    cast_function_name(&data_type_to_expr_type(data_type))
        .map_err(|_| unsupported(data_type.keyword().to_string()))
}

/// Map a type keyword onto the analyzer's type
pub fn data_type_to_expr_type(data_type: DataType) -> ExprType {
    match data_type {
        DataType::Null | DataType::Undefined => ExprType::Undefined,
        DataType::Boolean => ExprType::Boolean,
        DataType::Integer => ExprType::Integer,
        DataType::Long => ExprType::Long,
        DataType::Float => ExprType::Float,
        DataType::Double => ExprType::Double,
        DataType::String => ExprType::String,
        DataType::Date => ExprType::Date,
        DataType::Time => ExprType::Time,
        DataType::Timestamp => ExprType::Timestamp,
        DataType::Interval => ExprType::Interval,
    }
}

fn literal_value(lit: &Literal) -> ExprValue {
    match lit {
        Literal::Null => ExprValue::Null,
        Literal::Boolean(b) => ExprValue::Boolean(*b),
        Literal::Integer(i) => ExprValue::Integer(*i),
        Literal::Long(l) => ExprValue::Long(*l),
        Literal::Float(f) => ExprValue::Float(*f),
        Literal::Double(d) => ExprValue::Double(*d),
        Literal::String(s) => ExprValue::String(s.clone()),
        Literal::Date(d) => ExprValue::Date(*d),
        Literal::Time(t) => ExprValue::Time(*t),
        Literal::Timestamp(ts) => ExprValue::Timestamp(*ts),
    }
}

/// Field list of a relevance call as a tuple of field name to FLOAT boost
fn relevance_fields(fields: &RelevanceFieldList) -> Expression {
    Expression::Literal(ExprValue::tuple(
        fields
            .fields
            .iter()
            .map(|(field, boost)| (field.clone(), ExprValue::Float(*boost))),
    ))
}
