use crate::models::{Budget, DistanceBand, FilterError, FilterState, PlaceCategory};

impl FilterState {
    /// Single-select with off-toggle: picking the already-selected category
    /// clears it, anything else replaces it.
    pub fn toggle_category(&self, value: PlaceCategory) -> Self {
        let mut next = self.clone();
        next.category = if self.category == Some(value) {
            None
        } else {
            Some(value)
        };
        next
    }

    /// Radio semantics: unconditional replace, no deselect.
    pub fn set_budget(&self, value: Budget) -> Self {
        let mut next = self.clone();
        next.budget = Some(value);
        next
    }

    /// Radio semantics: unconditional replace, no deselect.
    pub fn set_distance(&self, value: DistanceBand) -> Self {
        let mut next = self.clone();
        next.distance = Some(value);
        next
    }

    /// Multi-select checkbox: insert when `included`, remove otherwise.
    pub fn toggle_amenity(&self, amenity: &str, included: bool) -> Self {
        let mut next = self.clone();
        if included {
            next.amenities.insert(amenity.to_string());
        } else {
            next.amenities.remove(amenity);
        }
        next
    }

    /// Panel-facing boundary: raw wire codes are validated here, so the
    /// matcher only ever sees closed enums.
    pub fn toggle_category_code(&self, code: &str) -> Result<Self, FilterError> {
        let value = PlaceCategory::parse(code)
            .ok_or_else(|| FilterError::UnknownCategory(code.to_string()))?;
        Ok(self.toggle_category(value))
    }

    pub fn set_budget_code(&self, code: &str) -> Result<Self, FilterError> {
        let value =
            Budget::parse(code).ok_or_else(|| FilterError::UnknownBudget(code.to_string()))?;
        Ok(self.set_budget(value))
    }

    pub fn set_distance_code(&self, code: &str) -> Result<Self, FilterError> {
        let value = DistanceBand::parse(code)
            .ok_or_else(|| FilterError::UnknownDistance(code.to_string()))?;
        Ok(self.set_distance(value))
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.budget.is_none()
            && self.distance.is_none()
            && self.amenities.is_empty()
    }
}
