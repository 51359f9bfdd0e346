use log::{debug, trace, warn};

use wolfe_core::{DifferentiableFunction, Observer};

use super::{
    ALPHA_MIN, Action, Config, Error, Event, MAX_UPDATE_ITERATIONS, Origin, Point, SLOPE_TOL,
    Solution, Status,
    bracket::{Bracket, Stagnation},
    evaluate::Probe,
    trial::{Trial, select},
};

/// Shrinks a bracket known to contain a Strong Wolfe step until one is found.
///
/// Each iteration picks a trial step by interpolation (or by bisection once
/// the bracket stops shrinking), evaluates it, and replaces one endpoint.
/// Trials below [`ALPHA_MIN`] end the search at the floor; trials above
/// `alpha_max` are capped.
///
/// If the iteration budget runs out, or the slope at the last trial falls
/// within [`SLOPE_TOL`] without meeting the conditions, the last trial is
/// returned as a best-effort step.
pub(super) fn zoom<F, Obs>(
    probe: &mut Probe<'_, F>,
    origin: &Origin,
    config: &Config,
    mut bracket: Bracket,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: DifferentiableFunction,
    Obs: Observer<Event, Action>,
{
    debug!(
        "zoom on [{}, {}] (f = {}, {})",
        bracket.lo.alpha, bracket.hi.alpha, bracket.lo.value, bracket.hi.value
    );

    let mut stagnation = Stagnation::default();
    let mut last: Option<Point> = None;

    let mut iter = 1;
    while iter < MAX_UPDATE_ITERATIONS && last.is_none_or(|p| p.slope.abs() > SLOPE_TOL) {
        probe.tick();

        let trial = if stagnation.is_stalled(bracket.width()) {
            Trial::bisection(&bracket)
        } else {
            select(&bracket)
        };

        let alpha = trial.alpha.min(config.alpha_max());
        if alpha < ALPHA_MIN {
            warn!("zoom trial {alpha} fell below the minimum step, returning {ALPHA_MIN}");
            return Ok(probe.finish(Status::Floor, ALPHA_MIN, None));
        }

        let point = probe.point(alpha)?;
        trace!("zoom {iter}: {:?} trial {point:?}", trial.kind);

        let event = Event::Zoom {
            iter,
            trial: trial.kind,
            point,
            lo: bracket.lo,
            hi: bracket.hi,
        };
        if event.stops(observer) {
            return Ok(probe.finish_at(Status::StoppedByObserver, point));
        }

        if !config.sufficient_decrease(origin, &point) || point.value >= bracket.lo.value {
            bracket.hi = point;
        } else {
            if config.curvature(origin, &point) {
                debug!("zoom accepted alpha = {alpha} after {iter} iterations");
                return Ok(probe.finish_at(Status::Converged, point));
            }
            if point.slope * (bracket.hi.alpha - bracket.lo.alpha) >= 0.0 {
                bracket.hi = bracket.lo;
            }
            bracket.lo = point;
        }

        last = Some(point);
        iter += 1;
    }

    match last {
        Some(point) if point.slope.abs() <= SLOPE_TOL => {
            debug!("zoom stopped on a flat slope at alpha = {}", point.alpha);
            Ok(probe.finish_at(Status::SlopeTolerance, point))
        }
        Some(point) => {
            warn!(
                "zoom exhausted {MAX_UPDATE_ITERATIONS} iterations, returning alpha = {}",
                point.alpha
            );
            Ok(probe.finish_at(Status::MaxIters, point))
        }
        None => Ok(probe.finish_at(Status::MaxIters, bracket.lo)),
    }
}
